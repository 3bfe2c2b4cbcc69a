//! ブロック分割モジュール
//!
//! OCRテキストを求人ごとのブロックに分割する。
//!
//! ## 処理フロー
//! 1. 空行区切りで分割（2ブロック以上なら採用）
//! 2. 空行構造が無い場合は職種名行で区切る（2状態のステートマシン）
//! 3. それでも0件なら非空白行すべてを1ブロックにする

use crate::extractors::is_title_line;
use crate::types::ListingBlock;

/// フォールバック分割の状態
#[derive(Debug)]
enum SegmenterState {
    AccumulatingEmpty,
    AccumulatingNonEmpty(Vec<String>),
}

impl SegmenterState {
    /// 1行を受け取り次の状態へ遷移。確定したブロックがあれば返す
    ///
    /// 非空の状態で職種名行を受け取ったときだけフラッシュする。
    fn accept(self, line: &str) -> (Self, Option<ListingBlock>) {
        match self {
            SegmenterState::AccumulatingNonEmpty(lines) if is_title_line(line) => (
                SegmenterState::AccumulatingNonEmpty(vec![line.to_string()]),
                ListingBlock::new(lines),
            ),
            SegmenterState::AccumulatingNonEmpty(mut lines) => {
                lines.push(line.to_string());
                (SegmenterState::AccumulatingNonEmpty(lines), None)
            }
            SegmenterState::AccumulatingEmpty => (
                SegmenterState::AccumulatingNonEmpty(vec![line.to_string()]),
                None,
            ),
        }
    }

    fn finish(self) -> Option<ListingBlock> {
        match self {
            SegmenterState::AccumulatingEmpty => None,
            SegmenterState::AccumulatingNonEmpty(lines) => ListingBlock::new(lines),
        }
    }
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|l| !l.trim().is_empty())
}

/// 空行区切りで分割
fn split_on_blank_lines(text: &str) -> Vec<ListingBlock> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if let Some(block) = ListingBlock::new(current.drain(..)) {
                blocks.push(block);
            }
        } else {
            current.push(line);
        }
    }
    blocks.extend(ListingBlock::new(current));

    blocks
}

/// 職種名行で区切って分割
fn split_on_title_lines(text: &str) -> Vec<ListingBlock> {
    let mut blocks = Vec::new();
    let mut state = SegmenterState::AccumulatingEmpty;

    for line in non_blank_lines(text) {
        let (next, flushed) = state.accept(line);
        state = next;
        blocks.extend(flushed);
    }
    blocks.extend(state.finish());

    blocks
}

/// OCRテキストをブロックに分割
///
/// 空白のみの入力に対してだけ空のVecを返す。
pub fn segment(text: &str) -> Vec<ListingBlock> {
    let primary = split_on_blank_lines(text);
    if primary.len() > 1 {
        return primary;
    }

    let fallback = split_on_title_lines(text);
    if !fallback.is_empty() {
        return fallback;
    }

    ListingBlock::new(non_blank_lines(text)).into_iter().collect()
}
