//! Category display formatting

use crate::models::Category;

use super::column_width;

/// Format categories as a simple table
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'fintrack init' to create default categories.\n"
            .to_string();
    }

    let name_width = column_width(categories.iter().map(|c| c.name.as_str()), 4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<name_width$}  {:<8}  {:<12}  {}\n",
        "ID",
        "Name",
        "Color",
        "Icon",
        "Kind",
        name_width = name_width,
    ));
    output.push_str(&"-".repeat(name_width + 40));
    output.push('\n');

    for category in categories {
        output.push_str(&format!(
            "{:>5}  {:<name_width$}  {:<8}  {:<12}  {}\n",
            category.id.get(),
            category.name,
            category.color,
            category.icon,
            if category.is_custom { "custom" } else { "default" },
            name_width = name_width,
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    #[test]
    fn test_format_category_list() {
        let categories = vec![Category {
            id: CategoryId::new(4),
            name: "Food".into(),
            color: "#FF6B6B".into(),
            icon: "Utensils".into(),
            is_custom: false,
        }];
        let output = format_category_list(&categories);
        assert!(output.contains("Food"));
        assert!(output.contains("default"));
    }

    #[test]
    fn test_empty_suggests_init() {
        assert!(format_category_list(&[]).contains("fintrack init"));
    }
}
