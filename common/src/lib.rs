//! jobscan Common Library
//!
//! OCRテキストから求人を構造化する純粋ロジック（I/Oなし）
//!
//! 分割 → フィールド抽出 → 組み立て

pub mod assembler;
pub mod error;
pub mod extractors;
pub mod segmenter;
pub mod types;
pub mod vocabulary;

pub use assembler::{assemble, assemble_all, ExtractionProfile};
pub use error::{Error, Result};
pub use extractors::AnnualizationRates;
pub use segmenter::segment;
pub use types::{
    EngagementType, ExtractedVacancy, ListingBlock, RemotePolicy, SeniorityLevel,
    DEFAULT_CURRENCY, SOURCE_PLATFORM,
};
pub use vocabulary::ExtractionVocabulary;
