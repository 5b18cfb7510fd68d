//! Whitespace cleanup for a paragraph's spans.
//!
//! The rules run over the paragraph's text as a whole, so a line break at the
//! end of one span followed by `」` at the start of the next is removed just
//! like one inside a single span. Every rule only deletes whitespace; each
//! surviving character stays in the span it came from.

use crate::portable_text::Span;

use super::punct::Punct;

/// A character tagged with the index of the span it belongs to.
type Owned = (usize, char);

/// Applies the cleanup rules in order:
///
/// 1. whitespace directly before `」！？。、』` is deleted,
/// 2. runs of plain spaces collapse to one,
/// 3. runs of three or more line breaks collapse to two.
pub fn clean_spans(spans: &[Span]) -> Vec<Span> {
    let mut chars: Vec<Owned> = spans
        .iter()
        .enumerate()
        .flat_map(|(i, span)| span.text().chars().map(move |c| (i, c)))
        .collect();

    drop_space_before_continuation(&mut chars);
    collapse_spaces(&mut chars);
    collapse_line_breaks(&mut chars);

    let mut texts = vec![String::new(); spans.len()];
    for (i, c) in chars {
        texts[i].push(c);
    }

    spans
        .iter()
        .zip(texts)
        .map(|(span, text)| span.with_text(text))
        .collect()
}

/// Spans of a fragment about to be absorbed: each trimmed, empty runs dropped.
pub fn trim_each(spans: &[Span]) -> Vec<Span> {
    spans
        .iter()
        .filter_map(|span| match &span.text {
            Some(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| span.with_text(trimmed.to_string()))
            }
            None => Some(span.clone()),
        })
        .collect()
}

/// Spans of a whole paragraph about to be absorbed: whitespace at the start
/// and end of the paragraph is trimmed, runs left empty are dropped, inner
/// spacing is kept.
pub fn trim_edges(spans: &[Span]) -> Vec<Span> {
    let mut out: Vec<Span> = spans.to_vec();

    for span in out.iter_mut() {
        let Some(text) = &span.text else { break };
        let trimmed = text.trim_start().to_string();
        let reached_text = !trimmed.is_empty();
        span.text = Some(trimmed);
        if reached_text {
            break;
        }
    }
    for span in out.iter_mut().rev() {
        let Some(text) = &span.text else { break };
        let trimmed = text.trim_end().to_string();
        let reached_text = !trimmed.is_empty();
        span.text = Some(trimmed);
        if reached_text {
            break;
        }
    }

    out.retain(|s| s.text.as_deref() != Some(""));
    out
}

fn drop_space_before_continuation(chars: &mut Vec<Owned>) {
    // Walk backwards so a whole run of whitespace is seen after its punctuation.
    let mut kept = Vec::with_capacity(chars.len());
    let mut before_continuation = false;
    for &(i, c) in chars.iter().rev() {
        if c.is_whitespace() {
            if before_continuation {
                continue;
            }
        } else {
            before_continuation = Punct::is_continuation(c);
        }
        kept.push((i, c));
    }
    kept.reverse();
    *chars = kept;
}

fn collapse_spaces(chars: &mut Vec<Owned>) {
    let mut previous_space = false;
    chars.retain(|&(_, c)| {
        let keep = !(c == ' ' && previous_space);
        previous_space = c == ' ';
        keep
    });
}

fn collapse_line_breaks(chars: &mut Vec<Owned>) {
    // `\r` doesn't count as a break of its own; it survives while it still
    // belongs to one of the first two breaks of a run.
    let mut breaks = 0;
    chars.retain(|&(_, c)| match c {
        '\n' => {
            breaks += 1;
            breaks <= 2
        }
        '\r' => breaks < 2,
        _ => {
            breaks = 0;
            true
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn clean(text: &str) -> String {
        clean_spans(&[Span::new(text)])[0].text().to_string()
    }

    fn spans(texts: &[&str]) -> Vec<Span> {
        texts.iter().map(|t| Span::new(*t)).collect()
    }

    fn span_texts(spans: &[Span]) -> Vec<&str> {
        spans.iter().map(Span::text).collect()
    }

    #[rstest]
    #[case("楽しい！\n」", "楽しい！」")]
    #[case("行こう \n\n 」と言った", "行こう」と言った")]
    #[case("本当に　？", "本当に？")]
    #[case("はい 、そうです 。", "はい、そうです。")]
    #[case("（ 笑 ）", "（ 笑 ）")]
    #[case("海  の   学校", "海 の 学校")]
    #[case("一\n\n\n\n二", "一\n\n二")]
    #[case("一\n\n二", "一\n\n二")]
    #[case("一\r\n\r\n\r\n二", "一\r\n\r\n二")]
    #[case("", "")]
    fn cleans_single_span(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean(input), expected);
    }

    #[test]
    fn break_before_quote_is_removed_across_spans() {
        let cleaned = clean_spans(&spans(&["楽しい！\n", "」"]));
        assert_eq!(span_texts(&cleaned), vec!["楽しい！", "」"]);
    }

    #[test]
    fn space_runs_are_collapsed_across_spans() {
        let cleaned = clean_spans(&spans(&["海 ", "  学校"]));
        assert_eq!(span_texts(&cleaned), vec!["海 ", "学校"]);
    }

    #[test]
    fn inline_objects_and_marks_survive() {
        let mut object = Span::new("ignored");
        object.kind = Some("emoji".into());
        object.text = None;
        let input = vec![
            Span::with_marks("楽しい ", ["strong"]),
            object.clone(),
            Span::new(" 」"),
        ];

        let cleaned = clean_spans(&input);

        assert_eq!(cleaned[0].text(), "楽しい");
        assert_eq!(cleaned[0].marks(), ["strong".to_string()]);
        assert_eq!(cleaned[1], object);
        assert_eq!(cleaned[2].text(), "」");
    }

    #[test]
    fn cleaning_twice_changes_nothing() {
        let input = spans(&["一 \n\n\n\n ", "  」二  \r\n\r\n\r\n", "　。"]);
        let once = clean_spans(&input);
        assert_eq!(clean_spans(&once), once);
    }

    #[test]
    fn trim_each_drops_blank_runs() {
        let trimmed = trim_each(&spans(&[" ！ ", "\n", "」\n"]));
        assert_eq!(span_texts(&trimmed), vec!["！", "」"]);
    }

    #[test]
    fn trim_edges_keeps_inner_spacing() {
        let trimmed = trim_edges(&spans(&["\n と ", "言った ", " \n"]));
        assert_eq!(span_texts(&trimmed), vec!["と ", "言った"]);
    }
}
