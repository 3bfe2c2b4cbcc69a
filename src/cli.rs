use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobscan")]
#[command(about = "求人スクリーンショットのOCRテキストを構造化する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 設定ファイル（省略時: ~/.config/jobscan/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像1枚をスキャンしてJSONを出力
    Scan {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// フォルダ直下の画像をまとめてスキャン
    ScanDir {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 検索パターン（* と ? が使える）
        #[arg(short, long, default_value = "*.*")]
        pattern: String,

        /// 出力JSONファイル（省略時: 入力フォルダ/jobscan-summary.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 画像を並列にスキャン
        #[arg(long)]
        parallel: bool,
    },

    /// OCR済みテキストファイルから求人を抽出
    Extract {
        /// テキストファイルのパス
        #[arg(required = true)]
        input: PathBuf,

        /// OCR信頼度として扱う値（0-100）
        #[arg(long, default_value = "100")]
        confidence: f64,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定の設定ファイルを書き出す
        #[arg(long)]
        init: bool,
    },

    /// 抽出語彙を管理
    Vocab {
        /// 現在の語彙をJSONで書き出す
        #[arg(long)]
        export: Option<PathBuf>,
    },
}
