use crate::model::{Catalog, CategoryGroup};

/// Icon for the categories the viewer knows about; anything else, `Other`
/// included, gets the generic icon.
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "Company APIs" => "🏢",
        "Fintech APIs" => "💳",
        "Integration APIs" => "🔗",
        _ => "📋",
    }
}

/// Group APIs by category.
///
/// Categories appear in first-occurrence order and APIs keep catalog order
/// within each group. Every API lands in exactly one group.
pub fn group_by_category(catalog: &Catalog) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for api in catalog.iter() {
        let category = api.category_name();
        match groups.iter_mut().find(|group| group.category == category) {
            Some(group) => group.apis.push(api),
            None => groups.push(CategoryGroup {
                category,
                icon: category_icon(category),
                apis: vec![api],
            }),
        }
    }
    groups
}
