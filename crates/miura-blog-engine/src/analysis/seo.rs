use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::portable_text::{Block, Span};

/// Site name used when none is configured.
pub const DEFAULT_SITE_NAME: &str = "三浦海の学校";

/// Characters of body text quoted in the meta description.
const DESCRIPTION_EXCERPT: usize = 120;
/// Search engines show about this many characters.
const DESCRIPTION_MAX: usize = 160;
const MAX_KEYWORDS: usize = 10;

const DIVING_KEYWORDS: &[&str] = &[
    "ダイビング", "スキューバ", "スクーバ", "潜水", "海中",
    "海況", "水温", "透明度", "流れ", "うねり",
    "ライセンス", "講習", "Cカード", "PADI", "NAUI",
    "器材", "レギュレーター", "BCD", "ウェットスーツ", "ドライスーツ",
    "魚", "海洋生物", "サンゴ", "ウミガメ", "写真", "撮影",
    "三浦", "城ヶ島", "油壺", "長井", "久里浜", "湘南", "相模湾",
    "体験", "ファンダイビング", "ツアー", "初心者", "安全",
];

const LOCATION_KEYWORDS: &[&str] = &["三浦半島", "神奈川", "関東", "東京近郊", "日帰り"];

const SEASON_KEYWORDS: &[&str] = &[
    "春", "夏", "秋", "冬", "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月",
    "10月", "11月", "12月",
];

fn temperature() -> &'static Regex {
    static TEMPERATURE: OnceLock<Regex> = OnceLock::new();
    TEMPERATURE.get_or_init(|| Regex::new(r"(\d{1,2})度").expect("Invalid temperature regex"))
}

/// Search and social metadata for a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub og_title: String,
    pub og_description: String,
}

impl SeoData {
    pub fn generate(title: &str, body: &[Block], site_name: &str) -> Self {
        let meta_description = meta_description(title, body, site_name);
        Self {
            keywords: keywords(title, body),
            og_title: og_title(title, site_name),
            og_description: meta_description.replace(&blog_suffix(site_name), ""),
            meta_description,
        }
    }
}

fn blog_suffix(site_name: &str) -> String {
    format!(" | {site_name}のダイビングブログ")
}

/// Every text run of every text block, separated by single spaces.
fn body_text(body: &[Block]) -> String {
    body.iter()
        .filter_map(Block::as_text)
        .flat_map(|block| block.spans().iter())
        .filter(|span| span.is_text_run() && !span.text().is_empty())
        .map(Span::text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Body excerpt (or the title when there is no body) with the blog suffix,
/// capped at 160 characters.
pub fn meta_description(title: &str, body: &[Block], site_name: &str) -> String {
    let text = body_text(body);
    let mut description = if text.is_empty() {
        title.to_string()
    } else {
        let excerpt: String = text.chars().take(DESCRIPTION_EXCERPT).collect();
        format!("{excerpt}...")
    };

    if !description.contains(site_name) {
        description.push_str(&blog_suffix(site_name));
    }

    description.chars().take(DESCRIPTION_MAX).collect()
}

/// Up to ten keywords found in the title and body: diving terms, places,
/// the first water temperature mentioned and seasons or months.
pub fn keywords(title: &str, body: &[Block]) -> Vec<String> {
    let all_text = format!("{title} {}", body_text(body));
    let mut keywords: Vec<String> = Vec::new();

    for &keyword in DIVING_KEYWORDS.iter().chain(LOCATION_KEYWORDS) {
        if all_text.contains(keyword) && !keywords.iter().any(|k| k == keyword) {
            keywords.push(keyword.to_string());
        }
    }

    if let Some(degrees) = temperature().captures(&all_text).and_then(|c| c.get(1)) {
        keywords.push(format!("水温{}度", degrees.as_str()));
    }

    for &month in SEASON_KEYWORDS {
        if all_text.contains(month) && !keywords.iter().any(|k| k == month) {
            keywords.push(month.to_string());
        }
    }

    keywords.truncate(MAX_KEYWORDS);
    keywords
}

pub fn og_title(title: &str, site_name: &str) -> String {
    if title.contains(site_name) {
        title.to_string()
    } else {
        format!("{title} | {site_name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{heading, image, paragraph};
    use pretty_assertions::assert_eq;

    #[test]
    fn description_without_body_uses_title() {
        assert_eq!(
            meta_description("夏の城ヶ島", &[], DEFAULT_SITE_NAME),
            "夏の城ヶ島 | 三浦海の学校のダイビングブログ"
        );
    }

    #[test]
    fn description_quotes_start_of_body() {
        let body = vec![paragraph(&"海".repeat(200))];
        let description = meta_description("タイトル", &body, DEFAULT_SITE_NAME);

        assert_eq!(
            description,
            format!("{}... | 三浦海の学校のダイビングブログ", "海".repeat(120))
        );
    }

    #[test]
    fn description_is_capped() {
        let title = "潜".repeat(200);
        let description = meta_description(&title, &[], DEFAULT_SITE_NAME);

        assert_eq!(description.chars().count(), DESCRIPTION_MAX);
        assert!(!description.contains(DEFAULT_SITE_NAME));
    }

    #[test]
    fn description_mentioning_site_has_no_suffix() {
        let body = vec![paragraph("三浦海の学校のプール講習です。")];
        assert_eq!(
            meta_description("t", &body, DEFAULT_SITE_NAME),
            "三浦海の学校のプール講習です。..."
        );
    }

    #[test]
    fn body_text_joins_runs_with_spaces() {
        let body = vec![heading("h2", "見出し"), image(), paragraph("本文")];
        assert_eq!(body_text(&body), "見出し 本文");
    }

    #[test]
    fn keywords_in_dictionary_order_with_temperature_and_season() {
        let body = vec![paragraph(
            "夏の城ヶ島でファンダイビング。水温は24度、透明度は10メートル。神奈川から日帰りで。",
        )];

        let keywords = keywords("初心者歓迎", &body);

        assert_eq!(
            keywords,
            vec![
                "ダイビング",
                "水温",
                "透明度",
                "城ヶ島",
                "ファンダイビング",
                "初心者",
                "神奈川",
                "日帰り",
                "水温24度",
                "夏",
            ]
        );
    }

    #[test]
    fn keywords_are_capped_at_ten() {
        let body = vec![paragraph(
            "ダイビング スキューバ スクーバ 潜水 海中 海況 水温 透明度 流れ うねり ライセンス 講習",
        )];
        assert_eq!(keywords("", &body).len(), MAX_KEYWORDS);
    }

    #[test]
    fn og_title_appends_site_once() {
        assert_eq!(og_title("講習案内", DEFAULT_SITE_NAME), "講習案内 | 三浦海の学校");
        assert_eq!(og_title("三浦海の学校より", DEFAULT_SITE_NAME), "三浦海の学校より");
    }

    #[test]
    fn og_description_drops_blog_suffix() {
        let seo = SeoData::generate("夏の城ヶ島", &[], DEFAULT_SITE_NAME);

        assert_eq!(seo.og_description, "夏の城ヶ島");
        assert_eq!(seo.og_title, "夏の城ヶ島 | 三浦海の学校");
        assert_eq!(seo.keywords, vec!["城ヶ島", "夏"]);
    }
}
