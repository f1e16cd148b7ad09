//! HTML page rendering module
//!
//! Builds the storefront pages from embedded templates. Product text is
//! HTML-escaped before interpolation.

use crate::store::Product;

/// Render the product list page
pub fn render_product_list(products: &[Product]) -> String {
    let items = if products.is_empty() {
        r#"        <p class="empty">No products available yet.</p>"#.to_string()
    } else {
        let rows: Vec<String> = products.iter().map(render_product_item).collect();
        format!("        <ul class=\"products\">\n{}\n        </ul>", rows.join("\n"))
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Store - Product List</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
            max-width: 720px;
            margin: 40px auto;
            padding: 0 20px;
            color: #1f2937;
        }}
        h1 {{
            border-bottom: 2px solid #e5e7eb;
            padding-bottom: 10px;
        }}
        .products {{
            list-style: none;
            padding: 0;
        }}
        .products li {{
            padding: 14px 16px;
            margin: 10px 0;
            border: 1px solid #e5e7eb;
            border-radius: 8px;
        }}
        .price {{
            float: right;
            font-weight: 600;
            color: #047857;
        }}
        .description {{
            margin: 6px 0 0;
            color: #6b7280;
            font-size: 0.9em;
        }}
        .empty {{
            color: #6b7280;
            font-style: italic;
        }}
    </style>
</head>
<body>
    <h1>Products</h1>
{items}
</body>
</html>"#
    )
}

fn render_product_item(product: &Product) -> String {
    format!(
        r#"            <li><strong>{}</strong><span class="price">{}</span><p class="description">{}</p></li>"#,
        escape_html(&product.name),
        product.display_price(),
        escape_html(&product.description),
    )
}

/// Escape text for interpolation into HTML
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
