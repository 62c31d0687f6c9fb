// Aggregation catalog over the loaded match and delivery tables.
//
// Every function here is pure: it takes `&Tables` plus scalar parameters and
// returns a small ranked or summarized result. Nothing is cached.

pub mod bucket;
pub mod error;
pub mod field;
pub mod overview;
pub mod player;
pub mod team;
pub mod trends;
pub mod venue;

pub use bucket::Bucket;
pub use error::StatsError;
pub use field::MatchField;

#[cfg(test)]
pub(crate) mod fixtures {
    use ipl_core::Tables;

    pub const MATCHES_CSV: &str = "\
id,season,city,venue,team1,team2,toss_winner,winner,result,player_of_match
1,2008,Bangalore,M Chinnaswamy Stadium,RCB,KKR,RCB,KKR,runs,BB McCullum
2,2008,Chandigarh,Punjab Cricket Association Stadium,KXIP,CSK,CSK,CSK,runs,MEK Hussey
3,2008,Delhi,Feroz Shah Kotla,DD,RR,RR,DD,wickets,MF Maharoof
4,2009,,Feroz Shah Kotla,DD,KKR,KKR,,NA,
5,2009,Bangalore,M Chinnaswamy Stadium,RCB,CSK,CSK,CSK,runs,MEK Hussey
6,2010,Kolkata,Eden Gardens,KKR,RCB,KKR,KKR,wickets,BB McCullum
7,2010,Bangalore,M Chinnaswamy Stadium,RCB,DD,RCB,RCB,tie,CH Gayle";

    pub const DELIVERIES_CSV: &str = "\
match_id,batter,bowler,batsman_runs,total_runs,player_dismissed,dismissal_kind
1,BB McCullum,P Kumar,4,4,,
1,BB McCullum,P Kumar,6,6,,
1,RT Ponting,Z Khan,1,1,,
1,RT Ponting,Z Khan,0,1,,
1,RT Ponting,Z Khan,0,0,RT Ponting,caught
2,MEK Hussey,S Sreesanth,4,4,,
2,MEK Hussey,S Sreesanth,0,0,MEK Hussey,run out
3,V Sehwag,SK Warne,0,0,V Sehwag,bowled
6,BB McCullum,Z Khan,2,2,,
6,SC Ganguly,Z Khan,0,0,SC Ganguly,lbw
6,SC Ganguly,Z Khan,0,0,BB McCullum,run out
99,CH Gayle,P Kumar,6,7,,";

    /// Seven matches over three seasons, twelve deliveries (one orphaned).
    pub fn tables() -> Tables {
        Tables::from_readers(MATCHES_CSV.as_bytes(), DELIVERIES_CSV.as_bytes())
            .expect("fixture tables should load")
    }

    /// Flatten buckets to `(label, value)` pairs for terse assertions.
    pub fn pairs<V: Copy>(buckets: &[crate::Bucket<V>]) -> Vec<(&str, V)> {
        buckets.iter().map(|b| (b.label.as_str(), b.value)).collect()
    }
}
