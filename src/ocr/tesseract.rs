//! Tesseract CLI連携
//!
//! `tesseract <image> stdout -l <lang> tsv` を画像ごとに子プロセスとして実行し、
//! TSV出力からテキストと平均信頼度を組み立てる。

use super::{OcrEngine, OcrError, OcrOutput};
use std::path::Path;
use std::process::Command;

/// 単語行を表すTSVのlevel
const WORD_LEVEL: &str = "5";

#[derive(Debug, Clone)]
pub struct TesseractCli {
    command: String,
    language: String,
}

impl TesseractCli {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new("tesseract", "eng")
    }
}

impl OcrEngine for TesseractCli {
    fn recognize(&self, image_path: &Path) -> Result<OcrOutput, OcrError> {
        tracing::debug!(image = %image_path.display(), command = %self.command, "running tesseract");

        let output = Command::new(&self.command)
            .arg(image_path)
            .args(["stdout", "-l", &self.language, "tsv"])
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => OcrError::EngineUnavailable(format!(
                    "'{}' not found on PATH",
                    self.command
                )),
                _ => OcrError::EngineUnavailable(format!("failed to start '{}': {}", self.command, e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_failure(output.status.code(), &stderr));
        }

        parse_tsv(&String::from_utf8_lossy(&output.stdout))
    }
}

/// 異常終了をエラー種別に振り分ける
fn classify_failure(code: Option<i32>, stderr: &str) -> OcrError {
    let lower = stderr.to_lowercase();
    let message = stderr.trim().lines().last().unwrap_or("").to_string();

    if lower.contains("tessdata") || lower.contains("traineddata") || lower.contains("failed loading language") {
        OcrError::MissingResources(message)
    } else {
        OcrError::Processing(format!("tesseract exited with code {:?}: {}", code, message))
    }
}

/// TSV出力をテキストと平均信頼度に変換
///
/// - 同じ行の単語はスペースで連結
/// - 行が変わると改行
/// - ブロック・段落が変わると空行（分割の手がかりを残す）
/// - 信頼度は conf >= 0 の単語の平均（単語が無ければ 0）
pub fn parse_tsv(tsv: &str) -> Result<OcrOutput, OcrError> {
    let mut rows = tsv.lines();
    let header: Vec<&str> = rows
        .next()
        .ok_or_else(|| OcrError::InvalidOutput("empty TSV output".into()))?
        .split('\t')
        .collect();

    let column = |name: &str| {
        header
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| OcrError::InvalidOutput(format!("missing column '{}'", name)))
    };
    let level_col = column("level")?;
    let block_col = column("block_num")?;
    let par_col = column("par_num")?;
    let line_col = column("line_num")?;
    let conf_col = column("conf")?;
    let text_col = column("text")?;
    let last_col = [level_col, block_col, par_col, line_col, conf_col, text_col]
        .into_iter()
        .max()
        .unwrap_or(text_col);

    let mut text = String::new();
    let mut previous: Option<(&str, &str, &str)> = None;
    let mut confidence_sum = 0.0;
    let mut word_count = 0usize;

    for row in rows {
        let fields: Vec<&str> = row.split('\t').collect();
        if fields.len() <= last_col || fields[level_col] != WORD_LEVEL {
            continue;
        }

        let word = fields[text_col].trim();
        if word.is_empty() {
            continue;
        }

        if let Ok(conf) = fields[conf_col].trim().parse::<f64>() {
            if conf >= 0.0 {
                confidence_sum += conf;
                word_count += 1;
            }
        }

        let key = (fields[block_col], fields[par_col], fields[line_col]);
        match previous {
            None => {}
            Some((block, par, _)) if block != key.0 || par != key.1 => text.push_str("\n\n"),
            Some((_, _, line)) if line != key.2 => text.push('\n'),
            Some(_) => text.push(' '),
        }
        text.push_str(word);
        previous = Some(key);
    }

    let confidence = if word_count == 0 {
        0.0
    } else {
        confidence_sum / word_count as f64
    };

    Ok(OcrOutput::new(text, confidence))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext";

    fn word(block: u32, par: u32, line: u32, conf: f64, text: &str) -> String {
        format!("5\t1\t{}\t{}\t{}\t1\t0\t0\t10\t10\t{}\t{}", block, par, line, conf, text)
    }

    #[test]
    fn test_parse_tsv_builds_lines_and_blocks() {
        let tsv = [
            HEADER.to_string(),
            "1\t1\t0\t0\t0\t0\t0\t0\t100\t100\t-1\t".to_string(),
            word(1, 1, 1, 90.0, "Senior"),
            word(1, 1, 1, 80.0, "Developer"),
            word(1, 1, 2, 70.0, "Acme"),
            word(2, 1, 1, 60.0, "Go"),
            word(2, 1, 1, 100.0, "Engineer"),
        ]
        .join("\n");

        let output = parse_tsv(&tsv).unwrap();
        assert_eq!(output.text, "Senior Developer\nAcme\n\nGo Engineer");
        assert!((output.confidence - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_tsv_ignores_negative_confidence() {
        let tsv = [HEADER.to_string(), word(1, 1, 1, -1.0, "x"), word(1, 1, 1, 50.0, "y")].join("\n");
        let output = parse_tsv(&tsv).unwrap();
        assert_eq!(output.text, "x y");
        assert_eq!(output.confidence, 50.0);
    }

    #[test]
    fn test_parse_tsv_no_words() {
        let output = parse_tsv(HEADER).unwrap();
        assert_eq!(output.text, "");
        assert_eq!(output.confidence, 0.0);
    }

    #[test]
    fn test_parse_tsv_rejects_missing_header() {
        assert!(matches!(parse_tsv(""), Err(OcrError::InvalidOutput(_))));
        assert!(matches!(parse_tsv("foo\tbar"), Err(OcrError::InvalidOutput(_))));
    }

    #[test]
    fn test_classify_failure() {
        let err = classify_failure(Some(1), "Error opening data file /usr/share/tessdata/eng.traineddata\nFailed loading language 'eng'");
        assert!(matches!(err, OcrError::MissingResources(_)));

        let err = classify_failure(Some(1), "Error in pixReadStream: Unknown format");
        assert!(matches!(err, OcrError::Processing(_)));
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let engine = TesseractCli::new("jobscan-no-such-ocr-binary", "eng");
        let err = engine.recognize(Path::new("whatever.png")).unwrap_err();
        assert!(matches!(err, OcrError::EngineUnavailable(_)));
    }
}
