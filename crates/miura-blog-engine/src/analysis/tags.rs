use std::collections::HashMap;

use serde::Serialize;

use crate::models::Post;

/// A topic tag and the keywords that trigger it.
#[derive(Debug)]
pub struct TagRule {
    pub tag: &'static str,
    pub keywords: &'static [&'static str],
    pub color: &'static str,
}

/// Colour for tags without a rule.
pub const DEFAULT_COLOR: &str = "#6B7280";

/// Diving topics, main categories first.
pub static RULES: &[TagRule] = &[
    TagRule {
        tag: "ライセンス講習",
        keywords: &[
            "ライセンス", "OWD", "AOW", "オープンウォーター", "アドバンス", "講習", "PADI",
            "スペシャルティ", "Cカード", "認定", "資格",
        ],
        color: "#3B82F6",
    },
    TagRule {
        tag: "ファンダイビング",
        keywords: &[
            "ファンダイビング", "ツアー", "ガイド", "探検", "魚", "ウミウシ", "サンゴ",
            "水中ツアー", "海中散歩",
        ],
        color: "#10B981",
    },
    TagRule {
        tag: "初心者向け",
        keywords: &[
            "初心者", "はじめて", "不安", "体験", "初回", "基本", "入門", "初級", "ビギナー",
            "安心",
        ],
        color: "#F59E0B",
    },
    TagRule {
        tag: "海況・コンディション",
        keywords: &[
            "水温", "透明度", "波", "うねり", "流れ", "海況", "コンディション", "天気", "風",
            "気温",
        ],
        color: "#06B6D4",
    },
    TagRule {
        tag: "器材・装備",
        keywords: &[
            "ウェットスーツ", "ドライスーツ", "BCD", "マスク", "フィン", "レギュレーター",
            "器材", "装備", "タンク", "ウェイト",
        ],
        color: "#8B5CF6",
    },
    TagRule {
        tag: "ビーチ情報",
        keywords: &[
            "三浦", "城ヶ島", "油壺", "ビーチ", "エントリー", "エキジット", "ポイント", "海岸",
            "磯",
        ],
        color: "#EC4899",
    },
    TagRule {
        tag: "水中撮影",
        keywords: &[
            "撮影", "写真", "カメラ", "動画", "フォト", "マクロ", "ワイド", "映像", "ムービー",
        ],
        color: "#EF4444",
    },
    TagRule {
        tag: "プール講習",
        keywords: &["プール", "練習", "スキル", "基礎", "限定水域", "安全", "温水"],
        color: "#14B8A6",
    },
    TagRule {
        tag: "安全管理",
        keywords: &[
            "安全", "AED", "救急", "緊急", "応急処置", "事故", "予防", "セーフティ",
        ],
        color: "#DC2626",
    },
    TagRule {
        tag: "eラーニング",
        keywords: &["eラーニング", "オンライン", "学習", "勉強", "理論", "知識", "テスト"],
        color: "#7C3AED",
    },
    TagRule {
        tag: "季節情報",
        keywords: &[
            "夏", "冬", "春", "秋", "シーズン", "季節", "梅雨", "ベストシーズン",
        ],
        color: "#059669",
    },
    TagRule {
        tag: "よくある質問",
        keywords: &[
            "質問", "FAQ", "疑問", "不安", "心配", "相談", "Q&A", "よくある",
        ],
        color: "#7C2D12",
    },
];

/// Tags whose keywords appear in the title or body, sorted.
///
/// Matching is a case-insensitive substring search.
pub fn detect(title: &str, body_text: &str) -> Vec<String> {
    let full_text = format!("{title} {body_text}").to_lowercase();
    let mut tags: Vec<String> = RULES
        .iter()
        .filter(|rule| {
            rule.keywords
                .iter()
                .any(|keyword| full_text.contains(&keyword.to_lowercase()))
        })
        .map(|rule| rule.tag.to_string())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

pub fn color(tag: &str) -> &'static str {
    RULES
        .iter()
        .find(|rule| rule.tag == tag)
        .map_or(DEFAULT_COLOR, |rule| rule.color)
}

/// How often a tag is used across posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
    pub color: &'static str,
}

/// Tag usage across posts' `auto_tags`, most used first.
///
/// Ties keep the order in which tags were first seen.
pub fn popular(posts: &[Post]) -> Vec<TagCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();

    for tag in posts.iter().flat_map(|post| post.auto_tags.iter()) {
        match index.get(tag.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(tag, counts.len());
                counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                    color: color(tag),
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post_with_tags(tags: &[&str]) -> Post {
        Post {
            id: "id".into(),
            title: "title".into(),
            slug: "slug".into(),
            main_image: None,
            body: Vec::new(),
            published_at: None,
            created_at: "2024-01-01T00:00:00Z".into(),
            auto_tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn detects_and_sorts_tags() {
        let tags = detect(
            "城ヶ島でファンダイビング",
            "水温は20度、透明度も良好でした。",
        );
        let mut expected = vec!["ビーチ情報", "ファンダイビング", "海況・コンディション"];
        expected.sort();

        assert_eq!(tags, expected);
    }

    #[test]
    fn matching_ignores_ascii_case() {
        assert_eq!(detect("padi aow", ""), vec!["ライセンス講習"]);
        assert_eq!(detect("よくあるfaq", ""), vec!["よくある質問"]);
    }

    #[test]
    fn shared_keyword_yields_each_tag_once() {
        // 安全 belongs to two rules, 不安 to two others
        let tags = detect("安全と不安", "");
        assert_eq!(tags.len(), 4);
        let mut deduped = tags.clone();
        deduped.dedup();
        assert_eq!(tags, deduped);
    }

    #[test]
    fn no_keywords_no_tags() {
        assert!(detect("Hello", "world").is_empty());
    }

    #[test]
    fn colors() {
        assert_eq!(color("水中撮影"), "#EF4444");
        assert_eq!(color("unknown"), DEFAULT_COLOR);
    }

    #[test]
    fn popular_tags_by_count_then_first_seen() {
        let posts = vec![
            post_with_tags(&["季節情報", "水中撮影"]),
            post_with_tags(&["水中撮影", "安全管理"]),
            post_with_tags(&["安全管理", "水中撮影"]),
        ];

        let counts: Vec<(String, usize)> = popular(&posts)
            .into_iter()
            .map(|c| (c.tag, c.count))
            .collect();

        assert_eq!(
            counts,
            vec![
                ("水中撮影".to_string(), 3),
                ("安全管理".to_string(), 2),
                ("季節情報".to_string(), 1),
            ]
        );
    }
}
