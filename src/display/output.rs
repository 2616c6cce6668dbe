use crate::analysis::reconcile::HeroChange;
use crate::playtime::{format_display, Minutes};
use crate::roles::{role_of, roster, Role};
use crate::store::HeroTimes;
use crate::tracker::{AccountRun, AccountStatus};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

const COLUMN_WIDTH: usize = 30;
const REPORT_TITLE: &str = "🎯 Total Time Played Per Hero (Sorted by Role & Time Played)";

#[derive(Tabled)]
struct ChangeRow {
    hero: String,
    role: String,
    previous: String,
    current: String,
    gained: String,
}

/// Heroes of one role present in `totals`, longest played first. Equal times
/// keep roster order.
pub fn role_ranking(totals: &HeroTimes, role: Role) -> Vec<(&'static str, Minutes)> {
    let mut ranked: Vec<_> = roster(role)
        .filter_map(|hero| totals.get(hero).map(|minutes| (hero, *minutes)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// `Name: 3h 5m` cells for each role, in report column order.
pub fn role_columns(totals: &HeroTimes) -> Vec<(Role, Vec<String>)> {
    Role::ALL
        .iter()
        .map(|role| {
            let cells: Vec<String> = role_ranking(totals, *role)
                .into_iter()
                .map(|(hero, minutes)| format!("{}: {}", hero, format_display(minutes)))
                .collect();
            (*role, cells)
        })
        .collect()
}

/// Header, dashed rule and side-by-side rows, one line each. The last
/// column is not padded.
pub fn render_role_table(columns: &[(Role, Vec<String>)]) -> Vec<String> {
    let max_rows = columns.iter().map(|(_, cells)| cells.len()).max().unwrap_or(0);

    let header: Vec<&str> = columns.iter().map(|(role, _)| role.label()).collect();
    let mut lines = vec![join_padded(&header), "-".repeat(COLUMN_WIDTH * 3)];

    for row in 0..max_rows {
        let cells: Vec<&str> = columns
            .iter()
            .map(|(_, cells)| cells.get(row).map(String::as_str).unwrap_or(""))
            .collect();
        lines.push(join_padded(&cells));
    }

    lines
}

fn join_padded(cells: &[&str]) -> String {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx + 1 == cells.len() {
            line.push_str(cell);
        } else {
            line.push_str(&format!("{:<width$}", cell, width = COLUMN_WIDTH));
        }
    }
    line
}

pub fn display_role_report(totals: &HeroTimes) {
    let lines = render_role_table(&role_columns(totals));

    println!("\n{}\n", REPORT_TITLE.bold().cyan());
    let mut lines = lines.into_iter();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }
}

pub fn display_account_summary(runs: &[AccountRun]) {
    for run in runs {
        match &run.status {
            AccountStatus::Updated { changes, saved } => {
                let suffix = if *saved { "" } else { " (dry run, not saved)" };
                if changes.is_empty() {
                    display_success(&format!("{}: no new playtime{}", run.tag, suffix));
                } else {
                    display_success(&format!(
                        "{}: {} heroes updated{}",
                        run.tag,
                        changes.len(),
                        suffix
                    ));
                    display_changes(changes);
                }
            }
            AccountStatus::SaveFailed { changes, error } => {
                display_warning(&format!("{}: merged but not saved ({})", run.tag, error));
                display_changes(changes);
            }
            AccountStatus::FetchFailed { error } => {
                display_warning(&format!(
                    "{}: using stored times, no fresh stats ({})",
                    run.tag, error
                ));
            }
            AccountStatus::LoadFailed { error } => {
                display_warning(&format!("{}: skipped ({})", run.tag, error));
            }
        }
    }
}

fn display_changes(changes: &[HeroChange]) {
    if changes.is_empty() {
        return;
    }

    let rows: Vec<ChangeRow> = changes
        .iter()
        .map(|change| ChangeRow {
            hero: change.hero.clone(),
            role: role_of(&change.hero)
                .map(|r| r.to_string())
                .unwrap_or_else(|| "-".to_string()),
            previous: change
                .previous
                .map(format_display)
                .unwrap_or_else(|| "new".to_string()),
            current: format_display(change.current),
            gained: format!("+{}", format_display(change.gained())),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(entries: &[(&str, Minutes)]) -> HeroTimes {
        entries.iter().map(|(h, m)| (h.to_string(), *m)).collect()
    }

    #[test]
    fn ranks_by_time_descending() {
        let ranked = role_ranking(&totals(&[("Reinhardt", 10), ("Zarya", 50)]), Role::Tank);
        assert_eq!(ranked, vec![("Zarya", 50), ("Reinhardt", 10)]);
    }

    #[test]
    fn ties_keep_roster_order() {
        let ranked = role_ranking(
            &totals(&[("Zenyatta", 30), ("Ana", 30), ("Mercy", 45)]),
            Role::Support,
        );
        assert_eq!(ranked, vec![("Mercy", 45), ("Ana", 30), ("Zenyatta", 30)]);
    }

    #[test]
    fn unassigned_heroes_are_left_out() {
        let columns = role_columns(&totals(&[("allHeroes", 900), ("Ana", 75)]));
        let cells: Vec<&String> = columns.iter().flat_map(|(_, c)| c).collect();
        assert_eq!(cells, vec!["Ana: 1h 15m"]);
    }

    #[test]
    fn names_must_match_the_roster_exactly() {
        let ranked = role_ranking(&totals(&[("soldier76", 90), ("Tracer", 20)]), Role::Damage);
        assert_eq!(ranked, vec![("Tracer", 20)]);

        let ranked = role_ranking(&totals(&[("D.Va", 10), ("dVa", 5)]), Role::Tank);
        assert_eq!(ranked, vec![("D.Va", 10)]);
    }

    #[test]
    fn renders_padded_columns() {
        let lines = render_role_table(&role_columns(&totals(&[
            ("Zarya", 50),
            ("Reinhardt", 10),
            ("Tracer", 125),
        ])));

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("{:<30}{:<30}{}", "Tank", "DPS", "Support"));
        assert_eq!(lines[1], "-".repeat(90));
        assert_eq!(lines[2], format!("{:<30}{:<30}{}", "Zarya: 50m", "Tracer: 2h 5m", ""));
        assert_eq!(lines[3], format!("{:<30}{:<30}{}", "Reinhardt: 10m", "", ""));
    }

    #[test]
    fn empty_totals_render_header_only() {
        let lines = render_role_table(&role_columns(&HeroTimes::new()));
        assert_eq!(lines.len(), 2);
    }
}
