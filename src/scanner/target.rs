//! スキャン対象の列挙
//!
//! 対応拡張子の判定、検索パターン（`*` と `?`）の照合、フォルダ直下の列挙。

use regex::Regex;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 対応する画像拡張子（大文字小文字は区別しない）
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "tif"];

/// 既定の検索パターン
pub const DEFAULT_PATTERN: &str = "*.*";

/// スキャン対象の画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub path: PathBuf,
    pub extension: String,
}

impl ScanTarget {
    /// 対応拡張子ならターゲットを作る
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        if is_image_extension(&extension) {
            Some(Self {
                path: path.to_path_buf(),
                extension,
            })
        } else {
            None
        }
    }

    /// 求人IDの接頭辞に使うファイル名stem
    pub fn source_id(&self) -> String {
        source_id(&self.path)
    }
}

/// ファイル名stem（取れなければ "image"）
pub fn source_id(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "image".to_string())
}

pub fn is_image_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

/// 検索パターンを正規表現に変換（ファイル名全体に一致、大文字小文字無視）
pub fn pattern_regex(pattern: &str) -> Option<Regex> {
    let pattern = if pattern.trim().is_empty() { DEFAULT_PATTERN } else { pattern.trim() };

    let mut re = String::from("(?i)^");
    for c in pattern.chars() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            _ => re.push_str(&regex::escape(&c.to_string())),
        }
    }
    re.push('$');

    Regex::new(&re).ok()
}

/// フォルダ直下の対象画像をパス順に列挙
///
/// フォルダが無ければ空。未対応の拡張子は黙って除外する。
pub fn enumerate_targets(folder: &Path, pattern: &str) -> Vec<ScanTarget> {
    if !folder.is_dir() {
        return Vec::new();
    }

    let matcher = match pattern_regex(pattern) {
        Some(re) => re,
        None => {
            tracing::warn!(pattern, "invalid search pattern");
            return Vec::new();
        }
    };

    let mut targets: Vec<ScanTarget> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| matcher.is_match(&e.file_name().to_string_lossy()))
        .filter_map(|e| ScanTarget::from_path(e.path()))
        .collect();

    // パスでソート
    targets.sort_by(|a, b| a.path.cmp(&b.path));
    targets
}
