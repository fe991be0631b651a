//! Team directory grouping.

use crate::types::{Category, TeamMember};

/// Category order used when the live category list is unavailable.
pub const FALLBACK_CATEGORY_ORDER: [&str; 5] = [
    "Partners",
    "Consulting Partners",
    "Associates",
    "Administrative Staff",
    "Assistants",
];

/// One rendered section of the team directory.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub name: String,
    pub members: Vec<TeamMember>,
}

/// Partition `members` into per-category sections.
///
/// Section order follows `categories` when given (and non-empty), otherwise
/// the fixed fallback order. Member order inside a section follows the input
/// order. Sections with no members are kept, so callers can choose to skip
/// rendering them. A member whose category matches no section is omitted.
pub fn group_by_category(
    members: &[TeamMember],
    categories: Option<&[Category]>,
) -> Vec<CategorySection> {
    let names: Vec<String> = match categories {
        Some(categories) if !categories.is_empty() => {
            categories.iter().map(|c| c.name.clone()).collect()
        }
        _ => FALLBACK_CATEGORY_ORDER
            .iter()
            .map(|name| name.to_string())
            .collect(),
    };

    names
        .into_iter()
        .map(|name| {
            let members = members
                .iter()
                .filter(|member| member.category == name)
                .cloned()
                .collect();
            CategorySection { name, members }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, name: &str, category: &str) -> TeamMember {
        TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            role: "Advocate".to_string(),
            category: category.to_string(),
            photo: None,
            email: None,
            bio: None,
            display_order: None,
        }
    }

    fn category(name: &str, order: i32) -> Category {
        Category {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            display_order: Some(order),
        }
    }

    #[test]
    fn fallback_order_keeps_empty_sections() {
        let members = vec![
            member("1", "Grace Mwangi", "Partners"),
            member("2", "Daniel Wekesa", "Partners"),
            member("3", "Brian Ochieng", "Associates"),
        ];

        let sections = group_by_category(&members, None);

        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Partners",
                "Consulting Partners",
                "Associates",
                "Administrative Staff",
                "Assistants",
            ]
        );

        assert_eq!(sections[0].members.len(), 2);
        assert_eq!(sections[1].members.len(), 0);
        assert_eq!(sections[2].members.len(), 1);
        assert_eq!(sections[3].members.len(), 0);
        assert_eq!(sections[4].members.len(), 0);
    }

    #[test]
    fn member_order_within_a_section_is_preserved() {
        let members = vec![
            member("1", "Grace Mwangi", "Partners"),
            member("2", "Daniel Wekesa", "Partners"),
        ];

        let sections = group_by_category(&members, None);
        let partners: Vec<&str> = sections[0]
            .members
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(partners, ["Grace Mwangi", "Daniel Wekesa"]);
    }

    #[test]
    fn live_categories_define_the_order() {
        let members = vec![
            member("1", "Brian Ochieng", "Associates"),
            member("2", "Grace Mwangi", "Partners"),
        ];
        let categories = vec![category("Associates", 1), category("Partners", 2)];

        let sections = group_by_category(&members, Some(&categories));
        let names: Vec<&str> = sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Associates", "Partners"]);
    }

    #[test]
    fn empty_live_categories_use_the_fallback_order() {
        let sections = group_by_category(&[], Some(&[]));
        assert_eq!(sections.len(), FALLBACK_CATEGORY_ORDER.len());
    }

    #[test]
    fn unknown_category_members_are_omitted() {
        let members = vec![member("1", "Visiting Counsel", "Of Counsel")];
        let sections = group_by_category(&members, None);
        assert!(sections.iter().all(|s| s.members.is_empty()));
    }
}
