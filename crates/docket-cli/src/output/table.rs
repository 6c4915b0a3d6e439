use docket_core::model::{CleanedSection, ItemExtraction};

pub fn format_sections(sections: &[CleanedSection]) -> String {
    let mut out = String::new();

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "=== Page {} - {} ===\n",
            section.page, section.label
        ));
        if section.content.is_empty() {
            out.push_str("(no text)\n");
        } else {
            out.push_str(&section.content);
            out.push('\n');
        }
    }

    out
}

pub fn format_items(result: &ItemExtraction) -> String {
    let mut out = String::new();
    out.push_str(&format!("Vendor: {}\n", result.vendor));

    if result.items.is_empty() {
        out.push_str("No line items found.\n");
        return out;
    }
    out.push('\n');

    let part_width = result
        .items
        .iter()
        .map(|item| item.part_id.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(1)
        .max("Part ID".len());

    out.push_str(&format!(
        "  {:<4}  {:<width$}  {:>5}  {:>10}  Description\n",
        "#",
        "Part ID",
        "Qty",
        "Price",
        width = part_width
    ));
    out.push_str(&format!(
        "  {}\n",
        "-".repeat(part_width + 4 + 5 + 10 + 11 + 8)
    ));

    for item in &result.items {
        let number = item
            .line_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".into());
        let qty = item
            .qty
            .map(|q| q.to_string())
            .unwrap_or_else(|| "-".into());
        let price = item
            .price
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".into());
        out.push_str(&format!(
            "  {:<4}  {:<width$}  {:>5}  {:>10}  {}\n",
            number,
            item.part_id.as_deref().unwrap_or("-"),
            qty,
            price,
            item.description,
            width = part_width
        ));
    }

    out
}
