// Plain-text rendering of a report: headline metrics followed by aligned
// two-column tables.

use crate::report::Report;
use ipl_stats::overview::TossImpact;
use ipl_stats::Bucket;
use std::io::{self, Write};

pub fn write_text<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    match report {
        Report::Home(home) => {
            heading(out, "IPL Analytics Dashboard")?;
            metrics(
                out,
                &[
                    ("Total Matches", home.total_matches.to_string()),
                    ("Total Seasons", home.seasons.to_string()),
                    ("Total Teams", home.teams.to_string()),
                    ("Total Venues", home.venues.to_string()),
                ],
            )?;
            table(
                out,
                "Matches Played Per Season",
                ("Season", "Matches"),
                &home.matches_per_season,
            )?;
            table(
                out,
                "Top Teams by Wins",
                ("Team", "Wins"),
                &home.top_winning_teams,
            )?;
            toss(out, &home.toss_impact)?;
        }
        Report::Team(team) => {
            heading(out, &format!("Team Performance: {}", team.team))?;
            let s = &team.summary;
            metrics(
                out,
                &[
                    ("Total Matches", s.matches.to_string()),
                    ("Total Wins", s.wins.to_string()),
                    ("Win Rate", format!("{:.1}%", s.win_rate)),
                    ("Total Losses", s.losses.to_string()),
                ],
            )?;
            table(
                out,
                "Season Wise Wins",
                ("Season", "Wins"),
                &team.season_wins,
            )?;
            table(out, "Top Venues", ("Venue", "Wins"), &team.top_venues)?;
        }
        Report::Teams { teams } => {
            heading(out, "Teams")?;
            for team in teams {
                writeln!(out, "  {team}")?;
            }
        }
        Report::Players(players) => {
            heading(out, "Player Statistics")?;
            table(
                out,
                "Top Run Scorers",
                ("Batter", "Total Runs"),
                &players.top_run_scorers,
            )?;
            table(
                out,
                "Top Wicket Takers",
                ("Bowler", "Total Wickets"),
                &players.top_wicket_takers,
            )?;
            table(
                out,
                "Player of the Match Awards",
                ("Player", "Awards"),
                &players.top_player_of_match_awards,
            )?;
        }
        Report::Venues(venues) => {
            heading(out, "Venue Analysis")?;
            table(
                out,
                "Top Venues by Number of Matches",
                ("Venue", "Matches"),
                &venues.top_venues,
            )?;
            table(
                out,
                "City-wise Match Distribution",
                ("City", "Matches"),
                &venues.cities,
            )?;
        }
        Report::Trends(trends) => {
            heading(out, "Trends & Insights")?;
            table(
                out,
                "Total Runs Scored Per Season",
                ("Season", "Total Runs"),
                &trends.runs_per_season,
            )?;
            table(
                out,
                "Result Type Distribution",
                ("Result Type", "Count"),
                &trends.result_types,
            )?;
            table(
                out,
                "Dismissal Types",
                ("Dismissal Type", "Count"),
                &trends.dismissal_types,
            )?;
        }
        Report::Distinct { field, count } => {
            metrics(out, &[(field.as_str(), count.to_string())])?;
        }
    }
    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    writeln!(out)
}

fn metrics<W: Write>(out: &mut W, rows: &[(&str, String)]) -> io::Result<()> {
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    for (label, value) in rows {
        writeln!(out, "{label:<width$}  {value}")?;
    }
    writeln!(out)
}

fn table<W: Write>(
    out: &mut W,
    title: &str,
    columns: (&str, &str),
    rows: &[Bucket<u64>],
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;
    if rows.is_empty() {
        writeln!(out, "(no data)")?;
        return writeln!(out);
    }
    let width = rows
        .iter()
        .map(|b| b.label.chars().count())
        .chain(std::iter::once(columns.0.chars().count()))
        .max()
        .unwrap_or(0);
    writeln!(out, "{:<width$}  {}", columns.0, columns.1)?;
    for row in rows {
        writeln!(out, "{:<width$}  {}", row.label.as_str(), row.value)?;
    }
    writeln!(out)
}

fn toss<W: Write>(out: &mut W, impact: &TossImpact) -> io::Result<()> {
    writeln!(out, "Toss Impact Analysis")?;
    writeln!(out, "--------------------")?;
    writeln!(
        out,
        "Toss winner won match   {} ({:.1}%)",
        impact.toss_winner_won,
        impact.won_pct()
    )?;
    writeln!(out, "Toss winner lost match  {}", impact.toss_winner_lost)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipl_core::Name;
    use ipl_stats::venue::VenueReport;

    fn render(report: &Report) -> String {
        let mut buf = Vec::new();
        write_text(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn tables_are_aligned_on_longest_label() {
        let report = Report::Venues(VenueReport {
            top_venues: vec![
                Bucket::new(Name::new("Eden Gardens"), 3),
                Bucket::new(Name::new("Wankhede"), 2),
            ],
            cities: vec![],
        });
        let text = render(&report);
        assert!(text.contains("Venue         Matches\n"));
        assert!(text.contains("Eden Gardens  3\n"));
        assert!(text.contains("Wankhede      2\n"));
        assert!(text.contains(
            "City-wise Match Distribution\n----------------------------\n(no data)\n"
        ));
    }

    #[test]
    fn distinct_renders_single_metric() {
        let report = Report::Distinct {
            field: "venue".into(),
            count: 4,
        };
        assert_eq!(render(&report), "venue  4\n\n");
    }
}
