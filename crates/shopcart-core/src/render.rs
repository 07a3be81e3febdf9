//! # HTML Rendering
//!
//! Turns a [`Cart`] into HTML fragments for a storefront page.
//!
//! ```text
//! <h3>Cart Items:</h3>
//! <ul><li>Knife - $2.58 x 2 = $5.16</li><li>Stick - $5.11 x 4 = $20.44</li></ul>
//! <strong>Cart Total: $25.60</strong><br/>
//! <br/><a href='https://www.instaProduct.com'>Click Here To Proceed To Checkout</a>
//! ```

use crate::cart::{Cart, ShoppingCart};

/// Escapes `& < > " '` the way PHP's `htmlspecialchars` does with `ENT_QUOTES`.
///
/// ## Example
/// ```rust
/// use shopcart_core::render::escape_html;
///
/// assert_eq!(escape_html("<b>Fish & Chips</b>"), "&lt;b&gt;Fish &amp; Chips&lt;/b&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the cart contents as a `<ul>` list, one `<li>` per product.
pub fn render_product_list(cart: &Cart) -> String {
    let mut output = String::from("<ul>");
    for line in cart.lines() {
        output.push_str(&format!(
            "<li>{} - {} x {} = {}</li>",
            line.name, line.unit_price, line.quantity, line.line_total
        ));
    }
    output.push_str("</ul>");
    output
}

/// Renders the full cart page: heading, item list, total and checkout link.
pub fn render_checkout_page(cart: &Cart) -> String {
    format!(
        "<h3>Cart Items:</h3>\n{}\n<strong>Cart Total: ${}</strong><br/>\n<br/><a href='{}'>Click Here To Proceed To Checkout</a>\n",
        render_product_list(cart),
        cart.total_formatted(),
        escape_html(cart.checkout_url()),
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Product;

    fn knife_and_stick() -> Cart {
        let mut cart = Cart::new();
        cart.add_product(Product::parse("Knife", "2.58", 2).unwrap()).unwrap();
        cart.add_product(Product::parse("Stick", "5.11", 4).unwrap()).unwrap();
        cart
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Knife"), "Knife");
        assert_eq!(escape_html("a\"b'c"), "a&quot;b&#039;c");
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        assert_eq!(escape_html("Café"), "Café");
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_product_list(&Cart::new()), "<ul></ul>");
    }

    #[test]
    fn test_render_product_list() {
        assert_eq!(
            render_product_list(&knife_and_stick()),
            "<ul><li>Knife - $2.58 x 2 = $5.16</li><li>Stick - $5.11 x 4 = $20.44</li></ul>"
        );
    }

    #[test]
    fn test_render_escapes_names() {
        let mut cart = Cart::new();
        cart.add_product(Product::parse("<script>alert(1)</script>", "1", 1).unwrap()).unwrap();

        let html = render_product_list(&cart);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn test_render_checkout_page() {
        let page = render_checkout_page(&knife_and_stick());

        assert!(page.starts_with("<h3>Cart Items:</h3>\n<ul><li>Knife"));
        assert!(page.contains("<strong>Cart Total: $25.60</strong><br/>"));
        assert!(page.contains(
            "<a href='https://www.instaProduct.com'>Click Here To Proceed To Checkout</a>"
        ));
    }
}
