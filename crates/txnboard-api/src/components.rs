//! HTML fragments for the transactions table
//!
//! Everything here renders a [`TableView`] produced by the core presenter;
//! no filtering or formatting decisions are made at this level.

use txnboard_core::{option_label, StyleTable, TableView, TransactionRow};
use txnboard_utils::escape_html;

/// Row background for money-out rows
pub const NEGATIVE_ROW_BG: &str = "#FFFBFA";
/// Row background for money-in rows
pub const POSITIVE_ROW_BG: &str = "#F6FEF9";
/// Amount color for money-out rows
pub const NEGATIVE_AMOUNT: &str = "#f04438";
/// Amount color for money-in rows
pub const POSITIVE_AMOUNT: &str = "#039855";

/// Id of the element the table partial is swapped into
pub const TABLE_TARGET_ID: &str = "transactions-table";

/// Delay before pending placeholders ask for the table again
pub const PENDING_POLL_MS: u64 = 500;

/// Small labelled pill styled from the style table
pub fn category_badge(styles: &StyleTable, label: &str) -> String {
    let style = styles.lookup(label);
    format!(
        r#"<div class='category-badge flex w-fit items-center gap-1 truncate rounded-2xl border py-[2px] pl-1.5 pr-2 {} {}'><div class='size-2 rounded-full {}'></div><p class='text-[12px] font-medium {}'>{}</p></div>"#,
        escape_html(&style.border_color),
        escape_html(&style.chip_background_color),
        escape_html(&style.background_color),
        escape_html(&style.text_color),
        escape_html(label)
    )
}

/// Skeleton rows shown while transactions load
pub fn placeholder_rows(count: usize) -> String {
    let mut html = String::from("<div class='space-y-2' data-mode='loading'>");
    for _ in 0..count {
        html.push_str("<div class='skeleton w-full h-12 rounded-md bg-gray-200 animate-pulse'></div>");
    }
    html.push_str("</div>");
    html
}

/// Placeholders that re-request the table until the store is readable
///
/// Swaps itself out for the next response, keeping the selected category.
pub fn pending_placeholders(placeholders: &str, selected: &str) -> String {
    format!(
        r#"<div class='pending-table' hx-get='/transactions/table?category={category}' hx-trigger='load delay:{delay}ms' hx-swap='outerHTML'>{placeholders}</div>"#,
        category = escape_html(&urlencoding::encode(selected)),
        delay = PENDING_POLL_MS,
        placeholders = placeholders,
    )
}

/// Message shown when there is nothing to list
pub fn empty_message() -> String {
    r#"<div class='text-center py-10' data-mode='empty'><p class='text-sm text-gray-500'>No transactions available</p></div>"#.to_string()
}

/// Category select; changing it re-renders the table partial
pub fn category_select(categories: &[String], selected: &str) -> String {
    let mut options = String::new();
    // A data category spelled like the sentinel repeats its value; only the first is selected
    let mut marked = false;
    for category in categories {
        let is_selected = !marked && category == selected;
        marked |= is_selected;
        options.push_str(&format!(
            "<option value='{}'{}>{}</option>",
            escape_html(category),
            if is_selected { " selected" } else { "" },
            escape_html(option_label(category))
        ));
    }

    format!(
        r#"<div class='flex items-center justify-end space-x-2 mb-2'>
            <label for='category-filter' class='text-sm text-gray-500'>Filter by category:</label>
            <select id='category-filter' name='category' hx-get='/transactions/table' hx-target='#{target}' hx-trigger='change'
                class='border border-gray-300 text-sm rounded-md px-3 py-1'>{options}</select>
            <button hx-get='/transactions/table?category={current}' hx-target='#{target}'
                class='px-2 py-1 text-sm text-gray-500 hover:text-gray-700' title='Refresh'>&#x21bb;</button>
        </div>"#,
        target = TABLE_TARGET_ID,
        options = options,
        current = escape_html(&urlencoding::encode(selected)),
    )
}

/// One table row
pub fn transaction_row(styles: &StyleTable, row: &TransactionRow) -> String {
    let (row_bg, amount_color) = if row.is_negative() {
        (NEGATIVE_ROW_BG, NEGATIVE_AMOUNT)
    } else {
        (POSITIVE_ROW_BG, POSITIVE_AMOUNT)
    };

    format!(
        r#"<tr class='border-b' style='background:{row_bg}' data-id='{id}'>
            <td class='max-w-[250px] pl-2 pr-10 py-3'><h1 class='text-sm truncate font-semibold text-[#344054]'>{name}</h1></td>
            <td class='pl-2 pr-10 font-semibold' style='color:{amount_color}'>{amount}</td>
            <td class='pl-2 pr-10'>{status}</td>
            <td class='min-w-32 pl-2 pr-10'>{date}</td>
            <td class='pl-2 pr-10 capitalize min-w-24'>{channel}</td>
            <td class='pl-2 pr-10 max-md:hidden'>{category}</td>
        </tr>"#,
        row_bg = row_bg,
        id = escape_html(&row.id),
        name = escape_html(&row.display_name),
        amount_color = amount_color,
        amount = escape_html(&row.display_amount),
        status = category_badge(styles, row.status.label()),
        date = escape_html(&row.display_date),
        channel = escape_html(&row.payment_channel),
        category = category_badge(styles, &row.category),
    )
}

/// The filter control plus the table
pub fn transactions_table(
    styles: &StyleTable,
    categories: &[String],
    selected: &str,
    rows: &[TransactionRow],
) -> String {
    let body: String = rows.iter().map(|row| transaction_row(styles, row)).collect();

    format!(
        r#"{filter}
        <table class='w-full text-sm' data-mode='populated'>
            <thead class='bg-[#f9fafb] text-left text-gray-500'>
                <tr>
                    <th class='px-2 py-2'>Transaction</th>
                    <th class='px-2 py-2'>Amount</th>
                    <th class='px-2 py-2'>Status</th>
                    <th class='px-2 py-2'>Date</th>
                    <th class='px-2 py-2 max-md:hidden'>Channel</th>
                    <th class='px-2 py-2 max-md:hidden'>Category</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>"#,
        filter = category_select(categories, selected),
        body = body,
    )
}

/// Render whichever mode the presenter produced
pub fn render_table_view(view: &TableView, styles: &StyleTable) -> String {
    match view {
        TableView::Loading { placeholder_rows: count } => placeholder_rows(*count),
        TableView::Empty => empty_message(),
        TableView::Populated {
            categories,
            selected_category,
            rows,
        } => transactions_table(styles, categories, selected_category, rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use txnboard_core::{AmountTone, TransactionStatus};

    fn row(id: &str, amount: &str, tone: AmountTone, category: &str) -> TransactionRow {
        TransactionRow {
            id: id.to_string(),
            display_name: "Uber 063015 SFPOOL".to_string(),
            formatted_amount: amount.trim_start_matches('-').to_string(),
            display_amount: amount.to_string(),
            is_debit: tone == AmountTone::Negative,
            is_credit: tone == AmountTone::Positive,
            tone,
            status: TransactionStatus::Success,
            display_date: "Sun, Mar 10, 12:00 AM".to_string(),
            payment_channel: "online".to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn test_badge_known_label() {
        let styles = StyleTable::builtin();
        let html = category_badge(&styles, "Travel");
        assert!(html.contains("border-[#0047AB]"));
        assert!(html.contains("bg-blue-500"));
        assert!(html.contains(">Travel</p>"));
    }

    #[test]
    fn test_badge_unknown_label_uses_default() {
        let styles = StyleTable::builtin();
        let default = styles.default_style();
        let html = category_badge(&styles, "Groceries");
        assert!(html.contains(&default.background_color));
        assert!(html.contains(&default.text_color));
        assert!(html.contains(">Groceries</p>"));
    }

    #[test]
    fn test_badge_escapes_label() {
        let styles = StyleTable::builtin();
        let html = category_badge(&styles, "<b>x</b>");
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_placeholder_rows_count() {
        let html = placeholder_rows(5);
        assert_eq!(html.matches("class='skeleton").count(), 5);
    }

    #[test]
    fn test_empty_message() {
        let html = render_table_view(&TableView::Empty, &StyleTable::builtin());
        assert!(html.contains("No transactions available"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("<select"));
    }

    #[test]
    fn test_category_select_options() {
        let categories = vec!["all".to_string(), "Food".to_string(), "Bank Fees".to_string()];
        let html = category_select(&categories, "Bank Fees");

        assert!(html.contains("<option value='all'>All</option>"));
        assert!(html.contains("<option value='Food'>Food</option>"));
        assert!(html.contains("<option value='Bank Fees' selected>Bank Fees</option>"));
        assert!(html.contains("category=Bank%20Fees"));
    }

    #[test]
    fn test_category_select_duplicate_all_selected_once() {
        let categories = vec!["all".to_string(), "Food".to_string(), "all".to_string()];
        let html = category_select(&categories, "all");

        assert_eq!(html.matches("<option value='all'").count(), 2);
        assert_eq!(html.matches(" selected>").count(), 1);
        assert!(html.contains("<option value='all' selected>All</option><option value='Food'>"));
    }

    #[test]
    fn test_pending_placeholders_poll_with_category() {
        let html = pending_placeholders(&placeholder_rows(5), "Bank Fees");
        assert!(html.contains("hx-get='/transactions/table?category=Bank%20Fees'"));
        assert!(html.contains("hx-trigger='load delay:500ms'"));
        assert!(html.contains("hx-swap='outerHTML'"));
        assert_eq!(html.matches("class='skeleton").count(), 5);
    }

    #[test]
    fn test_negative_and_positive_rows() {
        let styles = StyleTable::builtin();
        let negative = transaction_row(&styles, &row("1", "-$50.00", AmountTone::Negative, "Food"));
        assert!(negative.contains(NEGATIVE_ROW_BG));
        assert!(negative.contains(NEGATIVE_AMOUNT));
        assert!(negative.contains(">-$50.00</td>"));

        let positive = transaction_row(&styles, &row("2", "$20.00", AmountTone::Positive, "Payment"));
        assert!(positive.contains(POSITIVE_ROW_BG));
        assert!(positive.contains(POSITIVE_AMOUNT));
    }

    #[test]
    fn test_row_renders_two_badges() {
        let styles = StyleTable::builtin();
        let html = transaction_row(&styles, &row("1", "-$50.00", AmountTone::Negative, "Transfer"));
        assert_eq!(html.matches("category-badge").count(), 2);
        assert!(html.contains(">Success</p>"));
        assert!(html.contains(">Transfer</p>"));
    }

    #[test]
    fn test_populated_view_renders_table() {
        let view = TableView::Populated {
            categories: vec!["all".to_string(), "Food".to_string()],
            selected_category: "all".to_string(),
            rows: vec![row("1", "-$50.00", AmountTone::Negative, "Food")],
        };
        let html = render_table_view(&view, &StyleTable::builtin());
        assert!(html.contains("<select"));
        assert!(html.contains("<th class='px-2 py-2'>Transaction</th>"));
        assert_eq!(html.matches("<tr class='border-b'").count(), 1);
    }
}
