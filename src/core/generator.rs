// File: src/core/generator.rs

use crate::core::catalog;
use crate::core::types::{QueryCandidate, RankTier, SelectionSet};

/// Base term for the Quality Filter when nothing else is selected
/// ("fashion goods").
pub const FALLBACK_BASE: &str = "时尚好物";

/// Literal suffix for the Style Discovery rule ("women's").
const WOMENS_SUFFIX: &str = "女款";

/// Literal suffix for the Quality Filter rule ("high quality, free shipping").
const QUALITY_SUFFIX: &str = "高品质 包邮";

/// Turns a selection set into an ordered list of ranked query candidates.
///
/// Pure and total: the same selection always yields the same candidates,
/// and no input can fail. Rules run narrowest to broadest; the Broader
/// and Style Discovery rules deduplicate against the Focused string only,
/// never against each other. The Quality Filter always fires, so the
/// result is never empty — callers are expected to reject a selection
/// with no category/style/character before display
/// (`AtelierEngine::generate` does).
pub fn generate(selection: &SelectionSet) -> Vec<QueryCandidate> {
    let cats: Vec<&str> = translated(&selection.categories);
    let styles: Vec<&str> = translated(&selection.styles);
    let chars: Vec<&str> = translated(&selection.characters);
    let colors: Vec<&str> = selection.colors.iter().map(String::as_str).collect();
    let inspiration = catalog::translate_inspiration(&selection.inspiration);
    let inspiration = if inspiration.trim().is_empty() { "" } else { inspiration };

    let mut results = Vec::with_capacity(4);

    // 1. Focused Search: the narrowest query, first pick from every slot.
    let focused = join_terms(&[
        first(&chars),
        first(&cats),
        first(&styles),
        first(&colors),
        inspiration,
    ]);
    if !focused.is_empty() {
        results.push(QueryCandidate {
            tier: RankTier::Focused,
            keyword: focused.clone(),
        });
    }

    // 2. Broader Search: second picks where they exist (falling back to
    //    the first), and the first two categories together.
    let cat_pair = cats.iter().take(2).copied().collect::<Vec<_>>().join(" ");
    let broader = join_terms(&[
        second_or_first(&chars),
        &cat_pair,
        second_or_first(&styles),
        second_or_first(&colors),
    ]);
    if !broader.is_empty() && broader != focused {
        results.push(QueryCandidate {
            tier: RankTier::Broader,
            keyword: broader,
        });
    }

    // 3. Style Discovery: aesthetic-first ordering plus the women's
    //    suffix. Needs at least one of style/category/color; the suffix
    //    alone is not a query.
    let discovery_base = join_terms(&[first(&styles), first(&cats), first(&colors)]);
    if !discovery_base.is_empty() {
        let discovery = format!("{discovery_base} {WOMENS_SUFFIX}");
        if discovery != focused {
            results.push(QueryCandidate {
                tier: RankTier::StyleDiscovery,
                keyword: discovery,
            });
        }
    }

    // 4. Quality Filter: always present, never deduplicated, so the
    //    result sequence is never empty.
    let base = [first(&cats), first(&chars), first(&styles)]
        .into_iter()
        .find(|term| !term.is_empty())
        .unwrap_or(FALLBACK_BASE);
    results.push(QueryCandidate {
        tier: RankTier::QualityFilter,
        keyword: format!("{base} {QUALITY_SUFFIX}"),
    });

    results
}

/// Translates a list of display labels, dropping any that come back empty.
fn translated(labels: &[String]) -> Vec<&str> {
    labels
        .iter()
        .map(|label| catalog::translate(label))
        .filter(|term| !term.is_empty())
        .collect()
}

fn first<'a>(terms: &[&'a str]) -> &'a str {
    terms.first().copied().unwrap_or("")
}

/// The second term when present and non-empty, else the first, else "".
fn second_or_first<'a>(terms: &[&'a str]) -> &'a str {
    match terms.get(1) {
        Some(term) if !term.is_empty() => term,
        _ => first(terms),
    }
}

/// Space-joins the non-empty terms.
fn join_terms(terms: &[&str]) -> String {
    terms
        .iter()
        .filter(|term| !term.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(
        cats: &[&str],
        styles: &[&str],
        chars: &[&str],
        colors: &[&str],
        inspiration: &str,
    ) -> SelectionSet {
        SelectionSet {
            categories: cats.iter().map(|s| s.to_string()).collect(),
            styles: styles.iter().map(|s| s.to_string()).collect(),
            characters: chars.iter().map(|s| s.to_string()).collect(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
            inspiration: inspiration.to_string(),
            details: String::new(),
        }
    }

    #[test]
    fn focused_scenario_with_inspiration_alias() {
        let results = generate(&selection(
            &["T-Shirt"],
            &["Cottagecore"],
            &[],
            &["黑色"],
            "zendaya",
        ));
        assert_eq!(results[0].tier, RankTier::Focused);
        assert_eq!(results[0].keyword, "短袖T恤 田园风碎花 黑色 赞达亚穿搭");
        let quality = results.last().unwrap();
        assert_eq!(quality.tier, RankTier::QualityFilter);
        assert_eq!(quality.keyword, "短袖T恤 高品质 包邮");
    }

    #[test]
    fn empty_selection_yields_only_the_fallback_quality_filter() {
        let results = generate(&SelectionSet::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].tier, RankTier::QualityFilter);
        assert_eq!(results[0].keyword, "时尚好物 高品质 包邮");
    }

    #[test]
    fn always_ends_in_a_quality_filter_candidate() {
        let cases = [
            selection(&["Dress"], &[], &[], &[], ""),
            selection(&[], &["Goth"], &[], &["黑色"], ""),
            selection(&[], &[], &["Stitch"], &[], "kpop"),
        ];
        for case in &cases {
            let results = generate(case);
            assert!(!results.is_empty());
            assert_eq!(results.last().unwrap().tier, RankTier::QualityFilter);
        }
    }

    #[test]
    fn generate_is_idempotent() {
        let case = selection(
            &["Dress", "Skirt"],
            &["Coquette", "Y2K"],
            &["Kuromi"],
            &["玫红色", "黑色"],
            "blackpink",
        );
        assert_eq!(generate(&case), generate(&case));
    }

    #[test]
    fn broader_uses_second_picks_and_first_two_categories() {
        let results = generate(&selection(
            &["T-Shirt", "Dress"],
            &["Cottagecore", "Goth"],
            &[],
            &["黑色", "白色"],
            "",
        ));
        let broader = results
            .iter()
            .find(|c| c.tier == RankTier::Broader)
            .unwrap();
        assert_eq!(broader.keyword, "短袖T恤 连衣裙 哥特暗黑风 白色");
    }

    #[test]
    fn broader_falls_back_to_first_picks_and_dedupes_against_focused() {
        // One of everything and no inspiration: the broader query
        // collapses onto the focused one and is dropped.
        let results = generate(&selection(&["Dress"], &["Goth"], &["Stitch"], &["黑色"], ""));
        assert!(results.iter().all(|c| c.tier != RankTier::Broader));
    }

    #[test]
    fn style_discovery_orders_style_first_and_appends_suffix() {
        let results = generate(&selection(&["Dress"], &["Goth"], &[], &["黑色"], ""));
        let discovery = results
            .iter()
            .find(|c| c.tier == RankTier::StyleDiscovery)
            .unwrap();
        assert_eq!(discovery.keyword, "哥特暗黑风 连衣裙 黑色 女款");
    }

    #[test]
    fn style_discovery_needs_a_base_beyond_the_suffix() {
        // Characters only: no style/category/color base, so no bare
        // "女款" candidate.
        let results = generate(&selection(&[], &[], &["Stitch"], &[], ""));
        assert!(results.iter().all(|c| c.tier != RankTier::StyleDiscovery));
    }

    #[test]
    fn style_discovery_dedupes_against_focused_only() {
        // Style + color + an inspiration that passes through as "女款"
        // makes the focused and discovery strings byte-identical.
        let results = generate(&selection(&[], &["Goth"], &[], &["黑色"], "女款"));
        assert_eq!(results[0].keyword, "哥特暗黑风 黑色 女款");
        assert!(results.iter().all(|c| c.tier != RankTier::StyleDiscovery));
    }

    #[test]
    fn quality_filter_base_prefers_category_then_character_then_style() {
        let by_char = generate(&selection(&[], &["Goth"], &["Stitch"], &[], ""));
        assert_eq!(
            by_char.last().unwrap().keyword,
            "星际宝贝史迪仔 高品质 包邮"
        );
        let by_style = generate(&selection(&[], &["Goth"], &[], &[], ""));
        assert_eq!(by_style.last().unwrap().keyword, "哥特暗黑风 高品质 包邮");
    }

    #[test]
    fn untranslated_labels_flow_through_verbatim() {
        let results = generate(&selection(&["Chainmail Hauberk"], &[], &[], &[], ""));
        assert_eq!(results[0].keyword, "Chainmail Hauberk");
        assert_eq!(
            results.last().unwrap().keyword,
            "Chainmail Hauberk 高品质 包邮"
        );
    }

    #[test]
    fn whitespace_inspiration_contributes_no_slot() {
        let results = generate(&selection(&["Dress"], &[], &[], &[], "   "));
        assert_eq!(results[0].keyword, "连衣裙");
    }
}
