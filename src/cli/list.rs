use anyhow::Result;

use crate::cli::ui::truncate;
use crate::db::Database;

/// Execute the list command
pub fn run_list(db: &Database, page: u32, limit: u32) -> Result<()> {
    let total = db.count_companies()?;
    if total == 0 {
        println!("No companies yet. Use `drivecmd add` to create one.");
        return Ok(());
    }

    let page = page.max(1);
    let companies = db.list_companies(limit, page_offset(page, limit))?;

    println!(
        "{:<28}  {:<12}  {:<9}  {:<16}  {}",
        "COMPANY", "DRIVE TYPE", "CONTACTED", "ASSIGNED", "UPDATED"
    );

    for company in &companies {
        let drive_type = company
            .type_of_drive
            .map(|t| t.as_str())
            .unwrap_or("-");
        let assigned = company
            .assigned_officer
            .first()
            .map(String::as_str)
            .unwrap_or("unassigned");

        println!(
            "{:<28}  {:<12}  {:<9}  {:<16}  {}",
            truncate(&company.company_name, 28),
            drive_type,
            if company.is_contacted { "yes" } else { "no" },
            truncate(assigned, 16),
            company.updated_at.format("%Y-%m-%d"),
        );
    }

    let pages = total.div_ceil(limit.max(1));
    println!("\nPage {} of {} ({} companies)", page, pages.max(1), total);

    Ok(())
}

/// Row offset for a 1-based page. Saturates so absurd --page/--limit values
/// pin to the end instead of wrapping.
fn page_offset(page: u32, limit: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 20), 40);
    }

    #[test]
    fn test_page_offset_saturates_instead_of_wrapping() {
        assert_eq!(page_offset(u32::MAX, u32::MAX), u32::MAX);
        assert_eq!(page_offset(u32::MAX, 2), u32::MAX);
    }
}
