//! One-line renderings of panel snapshots for the log output.

use types::news::NewsItem;
use types::numeric::format_change;
use types::quote::{IndexQuote, Quote};

pub fn headline(item: &NewsItem) -> String {
    format!(
        "[{}] {} ({}) via {}",
        item.category.as_str().to_uppercase(),
        item.title,
        item.location,
        item.source
    )
}

pub fn quote_line(quote: &Quote) -> String {
    format!(
        "{} ${:.2} {} ({})",
        quote.symbol,
        quote.price,
        format_change(quote.change, false),
        format_change(quote.change_percent, true)
    )
}

pub fn index_line(index: &IndexQuote) -> String {
    format!(
        "{} {:.2} {}",
        index.symbol,
        index.value,
        format_change(index.change_percent, true)
    )
}

/// Join several renderings with a separator for a single log field.
pub fn joined<T>(items: &[T], render: fn(&T) -> String) -> String {
    items.iter().map(render).collect::<Vec<_>>().join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use simulation::seed::{seed_indices, seed_stocks};

    #[test]
    fn test_quote_line() {
        let aapl = &seed_stocks()[0];
        assert_eq!(quote_line(aapl), "AAPL $175.43 +2.15 (+1.24%)");
    }

    #[test]
    fn test_index_line() {
        let nasdaq = &seed_indices()[1];
        assert_eq!(index_line(nasdaq), "IXIC 15234.42 -0.23%");
    }

    #[test]
    fn test_joined() {
        let line = joined(&seed_indices(), index_line);
        assert_eq!(line.matches(" | ").count(), 2);
    }
}
