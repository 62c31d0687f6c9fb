// Player leaderboards: runs, wickets, player-of-the-match awards.

use crate::bucket::{sum_by, top, value_counts, Bucket};
use ipl_core::Tables;
use serde::Serialize;

/// Batters by total `batsman_runs`. A batter who faced a ball is ranked even
/// with a total of zero.
pub fn top_run_scorers(tables: &Tables, n: usize) -> Vec<Bucket<u64>> {
    top(
        sum_by(
            tables
                .deliveries()
                .iter()
                .map(|d| (&d.batter, u64::from(d.batsman_runs))),
        ),
        n,
    )
}

/// Bowlers by the number of deliveries on which a batter was dismissed.
///
/// Every dismissal is credited to the bowler on record, including run-outs
/// and other kinds a scorer would not credit to the bowler.
// TODO: decide with the product owner whether run out, retired hurt and
// obstructing the field should be excluded from bowler wickets.
pub fn top_wicket_takers(tables: &Tables, n: usize) -> Vec<Bucket<u64>> {
    top(
        value_counts(
            tables
                .deliveries()
                .iter()
                .filter(|d| d.is_wicket())
                .map(|d| &d.bowler),
        ),
        n,
    )
}

/// Players by player-of-the-match awards. "Unknown" is ranked like a player.
pub fn top_player_of_match_awards(tables: &Tables, n: usize) -> Vec<Bucket<u64>> {
    top(
        value_counts(tables.matches().iter().map(|m| &m.player_of_match)),
        n,
    )
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub top_run_scorers: Vec<Bucket<u64>>,
    pub top_wicket_takers: Vec<Bucket<u64>>,
    pub top_player_of_match_awards: Vec<Bucket<u64>>,
}

/// All three leaderboards at the same length `n`.
pub fn player_report(tables: &Tables, n: usize) -> PlayerReport {
    PlayerReport {
        top_run_scorers: top_run_scorers(tables, n),
        top_wicket_takers: top_wicket_takers(tables, n),
        top_player_of_match_awards: top_player_of_match_awards(tables, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{pairs, tables};
    use ipl_core::data::UNKNOWN;

    #[test]
    fn run_scorers_ranked_by_total() {
        let t = tables();
        assert_eq!(
            pairs(&top_run_scorers(&t, 10)),
            vec![
                ("BB McCullum", 12),
                ("CH Gayle", 6),
                ("MEK Hussey", 4),
                ("RT Ponting", 1),
                ("V Sehwag", 0),
                ("SC Ganguly", 0)
            ]
        );
    }

    #[test]
    fn run_scorers_keep_batters_without_runs() {
        let t = tables();
        let sehwag = top_run_scorers(&t, 20)
            .into_iter()
            .find(|b| b.label == "V Sehwag")
            .unwrap();
        assert_eq!(sehwag.value, 0);
    }

    #[test]
    fn run_scorers_zero_total_ranked_after_scorers() {
        let csv = "\
match_id,batter,bowler,batsman_runs,total_runs,player_dismissed,dismissal_kind
1,Z,Y,0,1,,
1,X,Y,4,4,,";
        let matches = "\
id,season,city,venue,team1,team2,toss_winner,winner,result,player_of_match
1,2008,C,V,A,B,A,A,runs,X";
        let t = Tables::from_readers(matches.as_bytes(), csv.as_bytes()).unwrap();
        assert_eq!(pairs(&top_run_scorers(&t, 10)), vec![("X", 4), ("Z", 0)]);
    }

    #[test]
    fn run_scorers_count_extras_only_as_total() {
        // RT Ponting's wide adds to total_runs but not to his batsman_runs.
        let t = tables();
        let ponting = top_run_scorers(&t, 10)
            .into_iter()
            .find(|b| b.label == "RT Ponting")
            .unwrap();
        assert_eq!(ponting.value, 1);
    }

    #[test]
    fn wicket_takers_only_count_dismissals() {
        let t = tables();
        let bowlers = top_wicket_takers(&t, 3);
        assert_eq!(
            pairs(&bowlers),
            vec![("Z Khan", 3), ("S Sreesanth", 1), ("SK Warne", 1)]
        );
        assert!(bowlers.iter().all(|b| b.label != "P Kumar"));
    }

    #[test]
    fn run_outs_credited_to_bowler_on_record() {
        let t = tables();
        let sreesanth = top_wicket_takers(&t, 10)
            .into_iter()
            .find(|b| b.label == "S Sreesanth")
            .unwrap();
        assert_eq!(sreesanth.value, 1);
    }

    #[test]
    fn awards_include_unknown() {
        let t = tables();
        assert_eq!(
            pairs(&top_player_of_match_awards(&t, 10)),
            vec![
                ("BB McCullum", 2),
                ("MEK Hussey", 2),
                ("MF Maharoof", 1),
                (UNKNOWN, 1),
                ("CH Gayle", 1)
            ]
        );
    }

    #[test]
    fn player_report_truncates_each_board() {
        let t = tables();
        let report = player_report(&t, 2);
        assert_eq!(report.top_run_scorers.len(), 2);
        assert_eq!(report.top_wicket_takers.len(), 2);
        assert_eq!(report.top_player_of_match_awards.len(), 2);
    }
}
