use anyhow::Result;

use crate::cli::edit::{fetch_roster, find_company};
use crate::config::Config;
use crate::core::ResolvedAssignee;
use crate::db::Database;

/// Execute the show command
pub fn run_show(db: &Database, config: &Config, identifier: &str) -> Result<()> {
    let company = match find_company(db, identifier.trim())? {
        Some(c) => c,
        None => {
            println!("No company found matching \"{}\".", identifier);
            return Ok(());
        }
    };

    let roster = fetch_roster(config);

    println!("{}", company.company_name);
    println!("  Id:              {}", company.id);
    if let Some(ref v) = company.company_address {
        println!("  Address:         {}", v);
    }
    if let Some(ref v) = company.drive {
        println!("  Drive:           {}", v);
    }
    if let Some(t) = company.type_of_drive {
        println!("  Type of drive:   {}", t.as_str());
    }
    if let Some(ref v) = company.follow_up {
        println!("  Follow up:       {}", v);
    }
    println!(
        "  Contacted:       {}",
        if company.is_contacted { "yes" } else { "no" }
    );
    if let Some(ref v) = company.contact_details {
        println!("  Contact details: {}", v);
    }
    if let Some(ref v) = company.hr1_details {
        println!("  HR1:             {}", v);
    }
    if let Some(ref v) = company.hr2_details {
        println!("  HR2:             {}", v);
    }
    if let Some(ref v) = company.package {
        println!("  Package:         {}", v);
    }
    if let Some(ref v) = company.remarks {
        println!("  Remarks:         {}", v);
    }

    match company.assigned_officer.first() {
        Some(identifier) => match ResolvedAssignee::lookup(identifier, &roster) {
            ResolvedAssignee::Member(m) => {
                println!(
                    "  Assigned to:     {} ({}, {})",
                    m.username,
                    m.role.as_str(),
                    m.email
                );
            }
            // Shown raw until a resolving roster becomes available.
            ResolvedAssignee::Unresolved(raw) => {
                println!("  Assigned to:     {}", raw);
            }
        },
        None => println!("  Assigned to:     unassigned"),
    }

    println!(
        "  Updated:         {}",
        company.updated_at.format("%Y-%m-%d %H:%M")
    );

    Ok(())
}
