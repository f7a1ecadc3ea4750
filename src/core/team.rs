//! Team identification and the per-session roster.
//!
//! ## TeamId
//!
//! Type-safe team identifier. Sessions have 1-3 teams.
//!
//! ## Roster
//!
//! Ordered team list backed by `Vec` for O(1) access by `TeamId`.
//! Owned by a round engine for the lifetime of one session.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Points awarded for a correct answer.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Most teams a session supports.
pub const MAX_TEAMS: usize = 3;

/// Team identifier.
///
/// Team indices are 0-based: the first team is `TeamId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all team IDs for a session with `team_count` teams.
    ///
    /// ```
    /// use alif_arena::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(3).collect();
    /// assert_eq!(teams, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Display color tag for a team, assigned in roster order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamColor {
    Pink,
    Blue,
    Emerald,
}

impl TeamColor {
    /// Colors in the order they are handed out.
    pub const ORDER: [TeamColor; MAX_TEAMS] = [TeamColor::Pink, TeamColor::Blue, TeamColor::Emerald];

    /// Color for the team at `id`.
    #[must_use]
    pub fn for_team(id: TeamId) -> Self {
        Self::ORDER[id.index() % MAX_TEAMS]
    }

    /// Styling class hosts attach to this team's badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            TeamColor::Pink => "bg-pink-500",
            TeamColor::Blue => "bg-blue-500",
            TeamColor::Emerald => "bg-emerald-500",
        }
    }
}

/// How a roster labels its teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamNaming {
    /// "Player 1" when playing alone, "Group N" otherwise.
    PlayerWhenSolo,
    /// Always "Group N".
    Groups,
}

/// One participant in a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub color: TeamColor,
    /// Running score. Only ever grows, in `POINTS_PER_CORRECT` steps.
    pub score: u32,
}

impl Team {
    /// Create a team with a zero score.
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: TeamColor::for_team(id),
            score: 0,
        }
    }

    /// Number of correct answers implied by the score.
    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.score / POINTS_PER_CORRECT
    }
}

/// Ordered team list with O(1) access by `TeamId`.
///
/// ## Example
///
/// ```
/// use alif_arena::core::{Roster, TeamId, TeamNaming};
///
/// let mut roster = Roster::new(2, TeamNaming::Groups);
/// roster.award(TeamId::new(1));
///
/// assert_eq!(roster[TeamId::new(0)].score, 0);
/// assert_eq!(roster[TeamId::new(1)].score, 10);
/// assert_eq!(roster[TeamId::new(1)].name, "Group 2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    /// Create a roster of `team_count` teams with zero scores.
    pub fn new(team_count: usize, naming: TeamNaming) -> Self {
        assert!(team_count > 0, "Must have at least 1 team");
        assert!(team_count <= MAX_TEAMS, "At most 3 teams supported");

        let teams = TeamId::all(team_count)
            .map(|id| {
                let name = match naming {
                    TeamNaming::PlayerWhenSolo if team_count == 1 => "Player 1".to_string(),
                    _ => format!("Group {}", id.index() + 1),
                };
                Team::new(id, name)
            })
            .collect();

        Self { teams }
    }

    /// Number of teams.
    #[must_use]
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Get a team.
    #[must_use]
    pub fn get(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    /// Get a team mutably.
    pub fn get_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id.index()]
    }

    /// Add the points for one correct answer to `id`.
    pub fn award(&mut self, id: TeamId) {
        self.get_mut(id).score += POINTS_PER_CORRECT;
    }

    /// Teams in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    /// Teams sorted by descending score; roster order breaks ties.
    #[must_use]
    pub fn ranking(&self) -> Vec<Team> {
        let mut ranked = self.teams.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// True when more than one team plays and every score matches the first.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.teams.len() > 1 && self.teams.iter().all(|t| t.score == self.teams[0].score)
    }
}

impl Index<TeamId> for Roster {
    type Output = Team;

    fn index(&self, id: TeamId) -> &Self::Output {
        self.get(id)
    }
}

impl IndexMut<TeamId> for Roster {
    fn index_mut(&mut self, id: TeamId) -> &mut Self::Output {
        self.get_mut(id)
    }
}
