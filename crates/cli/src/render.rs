//! Terminal rendering for candidate cards and the saved-candidate table.

use colored::Colorize;
use model::Candidate;
use query::{SortKey, SortState};

const AVATAR_PLACEHOLDER: &str = "https://placehold.co/400";

fn or_na(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("N/A")
}

/// Print the candidate under review as a card.
pub fn print_candidate_card(candidate: &Candidate, position: usize, total: usize) {
    println!();
    println!(
        "{} {}",
        format!("Candidate {} of {}", position + 1, total).bold().blue(),
        or_na(&candidate.full_name).bold()
    );
    println!(
        "  Avatar:   {}",
        candidate.avatar_url.as_deref().unwrap_or(AVATAR_PLACEHOLDER)
    );
    println!("  Username: {}", candidate.user_login);
    println!("  Location: {}", or_na(&candidate.user_location));
    println!("  Email:    {}", or_na(&candidate.contact_email));
    println!("  GitHub:   {}", candidate.profile_url);
    println!("  Company:  {}", or_na(&candidate.company_name));
    if let Some(bio) = &candidate.biography {
        println!("  Bio:      {}", bio);
    }
}

/// Header cell text, with the sort arrow when this column is active.
pub fn header_label(label: &str, key: SortKey, state: &SortState) -> String {
    match state.indicator(key) {
        Some(arrow) => format!("{label} {arrow}"),
        None => label.to_string(),
    }
}

/// Print query results as a table.
pub fn print_saved_table(rows: &[Candidate], state: &SortState) {
    let columns = [
        ("Name", SortKey::FullName),
        ("Username", SortKey::UserLogin),
        ("Location", SortKey::UserLocation),
        ("Email", SortKey::ContactEmail),
        ("GitHub URL", SortKey::ProfileUrl),
        ("Company", SortKey::CompanyName),
    ];
    let header = columns
        .iter()
        .map(|(label, key)| format!("{:<24}", header_label(label, *key, state)))
        .collect::<Vec<_>>()
        .join("");
    println!("{}", header.bold().blue());

    for candidate in rows {
        let cells = [
            or_na(&candidate.full_name),
            candidate.user_login.as_str(),
            or_na(&candidate.user_location),
            or_na(&candidate.contact_email),
            candidate.profile_url.as_str(),
            or_na(&candidate.company_name),
        ];
        let line = cells
            .iter()
            .map(|cell| format!("{:<24}", cell))
            .collect::<Vec<_>>()
            .join("");
        println!("{}", line);
    }
}
