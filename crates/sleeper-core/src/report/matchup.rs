//! Head-to-head scoreboard for one week.
//!
//! Matchup records are grouped by `matchup_id`. Only groups of exactly two
//! records form a head-to-head pairing; byes (a lone record) and anything
//! larger are left out of the report without error. Each pairing renders as a
//! self-contained block:
//!
//! ```text
//! Matchup 1
//! alice (7-3)                        vs  bob (5-5)
//! ---------------------------------------------------------------------
//! QB: P. Mahomes                24.4  |  QB: J. Allen                  31.2
//! D/ST: KC                            |  D/ST: SF                       4.0
//! ---------------------------------------------------------------------
//! Total                        112.4  |  Total                         98.7
//! ```

use std::collections::{BTreeMap, HashMap};

use super::{RosterJoinEngine, Table, UNKNOWN_OWNER};
use crate::models::{League, Matchup, PlayerDirectory, Roster, User};
use crate::utils::{format_points, truncate_string};

const NAME_WIDTH: usize = 24;
const POINTS_WIDTH: usize = 7;
const SIDE_WIDTH: usize = NAME_WIDTH + 1 + POINTS_WIDTH;
const GUTTER: &str = "  |  ";

/// Width of the divider lines between matchup blocks
pub const REPORT_WIDTH: usize = SIDE_WIDTH * 2 + GUTTER.len();

/// One team in a pairing, with owner and record already resolved.
#[derive(Debug, Clone)]
pub struct MatchupSide<'a> {
    pub owner: &'a str,
    pub record: String,
    pub matchup: &'a Matchup,
}

#[derive(Debug, Clone)]
pub struct HeadToHead<'a> {
    pub matchup_id: i64,
    pub home: MatchupSide<'a>,
    pub away: MatchupSide<'a>,
}

pub struct MatchupReportBuilder<'a> {
    league: Option<&'a League>,
    rosters: HashMap<i64, &'a Roster>,
    join: RosterJoinEngine<'a>,
}

impl<'a> MatchupReportBuilder<'a> {
    pub fn new(
        league: Option<&'a League>,
        rosters: &'a [Roster],
        users: &'a [User],
        players: &'a PlayerDirectory,
    ) -> Self {
        Self {
            league,
            rosters: rosters.iter().map(|r| (r.roster_id, r)).collect(),
            join: RosterJoinEngine::new(users, players),
        }
    }

    /// Partition records by `matchup_id`, ascending. Records without an id are dropped.
    pub fn group(matchups: &[Matchup]) -> BTreeMap<i64, Vec<&Matchup>> {
        let mut groups: BTreeMap<i64, Vec<&Matchup>> = BTreeMap::new();
        for matchup in matchups {
            if let Some(id) = matchup.matchup_id {
                groups.entry(id).or_default().push(matchup);
            }
        }
        groups
    }

    /// Head-to-head pairings: groups of exactly two, in `matchup_id` order.
    pub fn pairs(&self, matchups: &'a [Matchup]) -> Vec<HeadToHead<'a>> {
        Self::group(matchups)
            .into_iter()
            .filter_map(|(matchup_id, group)| match group.as_slice() {
                [home, away] => Some(HeadToHead {
                    matchup_id,
                    home: self.side(*home),
                    away: self.side(*away),
                }),
                _ => None,
            })
            .collect()
    }

    fn side(&self, matchup: &'a Matchup) -> MatchupSide<'a> {
        let roster = self.rosters.get(&matchup.roster_id).copied();
        MatchupSide {
            owner: roster
                .map(|r| self.join.owner_name(r.owner_id.as_deref()))
                .unwrap_or(UNKNOWN_OWNER),
            record: roster.map(Roster::record).unwrap_or_else(|| "0-0".to_string()),
            matchup,
        }
    }

    fn side_cell(label: &str, points: Option<f64>) -> String {
        format!(
            "{:<name$} {:>pts$}",
            truncate_string(label, NAME_WIDTH),
            format_points(points),
            name = NAME_WIDTH,
            pts = POINTS_WIDTH
        )
    }

    fn starter_cell(&self, side: &MatchupSide<'_>, slot: usize) -> String {
        match side.matchup.starters.get(slot) {
            Some(id) => {
                let label = super::starter_label(id, self.join.players());
                Self::side_cell(&label, side.matchup.starter_points(slot))
            }
            None => String::new(),
        }
    }

    fn join_sides(left: &str, right: &str) -> String {
        format!("{:<width$}{}{}", left, GUTTER, right, width = SIDE_WIDTH)
            .trim_end()
            .to_string()
    }

    /// Render one pairing: header, aligned starter lines, totals.
    pub fn render_pair(&self, pair: &HeadToHead<'_>) -> String {
        let rule = "-".repeat(REPORT_WIDTH);
        let mut lines = vec![format!("Matchup {}", pair.matchup_id)];

        let home = format!("{} ({})", pair.home.owner, pair.home.record);
        let away = format!("{} ({})", pair.away.owner, pair.away.record);
        lines.push(
            format!(
                "{:<side$}{:^gutter$}{}",
                home,
                "vs",
                away,
                side = SIDE_WIDTH,
                gutter = GUTTER.len()
            )
            .trim_end()
            .to_string(),
        );
        lines.push(rule.clone());

        let slots = pair
            .home
            .matchup
            .starters
            .len()
            .max(pair.away.matchup.starters.len());
        for slot in 0..slots {
            let left = self.starter_cell(&pair.home, slot);
            let right = self.starter_cell(&pair.away, slot);
            lines.push(Self::join_sides(&left, &right));
        }

        lines.push(rule);
        lines.push(Self::join_sides(
            &Self::side_cell("Total", Some(pair.home.matchup.total_points())),
            &Self::side_cell("Total", Some(pair.away.matchup.total_points())),
        ));

        lines.join("\n")
    }

    /// One block per valid pairing, in `matchup_id` order.
    pub fn render_blocks(&self, matchups: &'a [Matchup]) -> Vec<String> {
        self.pairs(matchups)
            .iter()
            .map(|pair| self.render_pair(pair))
            .collect()
    }

    /// The full week report: title, then each block framed by divider lines.
    pub fn render(&self, week: u8, matchups: &'a [Matchup]) -> String {
        let title = match self.league {
            Some(league) if !league.name.is_empty() => format!("{} - Week {}", league.name, week),
            _ => format!("Week {}", week),
        };
        let divider = "=".repeat(REPORT_WIDTH);

        let blocks = self.render_blocks(matchups);
        if blocks.is_empty() {
            return format!("{}\n{}\nNo head-to-head matchups for week {}", title, divider, week);
        }

        let mut out = vec![title, divider.clone()];
        for block in blocks {
            out.push(block);
            out.push(divider.clone());
        }
        out.join("\n")
    }

    /// Flat per-team view: one row per matchup record, pairings ignored.
    pub fn team_table(&self, matchups: &[Matchup]) -> Table {
        let mut table = Table::new(["Owner", "Starters", "Points"]);
        for matchup in matchups {
            let owner = self
                .rosters
                .get(&matchup.roster_id)
                .map(|r| self.join.owner_name(r.owner_id.as_deref()))
                .unwrap_or(UNKNOWN_OWNER);
            table.push_row(vec![
                owner.to_string(),
                self.join.starter_labels(&matchup.starters).join(", "),
                format_points(Some(matchup.total_points())),
            ]);
        }
        table
    }
}
