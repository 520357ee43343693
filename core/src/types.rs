//! Enumerations shared by several replies.
//!
//! # Design
//! The API adds games and lobbies over time, so every enumeration that is
//! decoded from a reply has an `Unknown` variant instead of failing. The
//! JSON mapping lives in `codec`.

use std::fmt;

macro_rules! game_types {
    ($($variant:ident => ($id:expr, $type_name:expr, $db_name:expr, $display:expr)),+ $(,)?) => {
        /// A game (or game family) on the network.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum GameType {
            $($variant,)+
            /// A label this client does not know about.
            Unknown,
        }

        impl GameType {
            /// Every known game type, in id order.
            pub const ALL: &'static [GameType] = &[$(GameType::$variant),+];

            /// Numeric id used by some endpoints (e.g. boosters).
            pub fn id(self) -> Option<u32> {
                match self {
                    $(GameType::$variant => Some($id),)+
                    GameType::Unknown => None,
                }
            }

            /// Upper-case type name, e.g. `BEDWARS`.
            pub fn type_name(self) -> Option<&'static str> {
                match self {
                    $(GameType::$variant => Some($type_name),)+
                    GameType::Unknown => None,
                }
            }

            /// Name used as the key in player stats, e.g. `Bedwars`.
            pub fn database_name(self) -> Option<&'static str> {
                match self {
                    $(GameType::$variant => Some($db_name),)+
                    GameType::Unknown => None,
                }
            }

            /// Human readable name, e.g. `Bed Wars`.
            pub fn display_name(self) -> &'static str {
                match self {
                    $(GameType::$variant => $display,)+
                    GameType::Unknown => "Unknown",
                }
            }
        }
    };
}

game_types! {
    Quakecraft => (2, "QUAKECRAFT", "Quake", "Quake"),
    Walls => (3, "WALLS", "Walls", "Walls"),
    Paintball => (4, "PAINTBALL", "Paintball", "Paintball"),
    SurvivalGames => (5, "SURVIVAL_GAMES", "HungerGames", "Blitz Survival Games"),
    TntGames => (6, "TNTGAMES", "TNTGames", "TNT Games"),
    Vampirez => (7, "VAMPIREZ", "VampireZ", "VampireZ"),
    Walls3 => (13, "WALLS3", "Walls3", "Mega Walls"),
    Arcade => (14, "ARCADE", "Arcade", "Arcade"),
    Arena => (17, "ARENA", "Arena", "Arena"),
    Uhc => (20, "UHC", "UHC", "UHC Champions"),
    Mcgo => (21, "MCGO", "MCGO", "Cops and Crims"),
    Battleground => (23, "BATTLEGROUND", "Battleground", "Warlords"),
    SuperSmash => (24, "SUPER_SMASH", "SuperSmash", "Smash Heroes"),
    Gingerbread => (25, "GINGERBREAD", "GingerBread", "Turbo Kart Racers"),
    Housing => (26, "HOUSING", "Housing", "Housing"),
    Skywars => (51, "SKYWARS", "SkyWars", "SkyWars"),
    TrueCombat => (52, "TRUE_COMBAT", "TrueCombat", "Crazy Walls"),
    SpeedUhc => (54, "SPEED_UHC", "SpeedUHC", "Speed UHC"),
    Skyclash => (55, "SKYCLASH", "SkyClash", "SkyClash"),
    Legacy => (56, "LEGACY", "Legacy", "Classic Games"),
    Prototype => (57, "PROTOTYPE", "Prototype", "Prototype"),
    Bedwars => (58, "BEDWARS", "Bedwars", "Bed Wars"),
    MurderMystery => (59, "MURDER_MYSTERY", "MurderMystery", "Murder Mystery"),
    BuildBattle => (60, "BUILD_BATTLE", "BuildBattle", "Build Battle"),
    Duels => (61, "DUELS", "Duels", "Duels"),
    Skyblock => (63, "SKYBLOCK", "SkyBlock", "SkyBlock"),
    Pit => (64, "PIT", "Pit", "Pit"),
    Replay => (65, "REPLAY", "Replay", "Replay"),
    Smp => (67, "SMP", "SMP", "SMP"),
    WoolGames => (68, "WOOL_GAMES", "WoolGames", "Wool Wars"),
}

impl GameType {
    /// Looks up a game type by numeric id; unmatched ids give `Unknown`.
    pub fn from_id(id: u64) -> GameType {
        Self::ALL
            .iter()
            .copied()
            .find(|game| game.id().map(u64::from) == Some(id))
            .unwrap_or(GameType::Unknown)
    }

    /// Looks up a game type by type name or database name (case-sensitive);
    /// unmatched names give `Unknown`.
    pub fn from_name(name: &str) -> GameType {
        Self::ALL
            .iter()
            .copied()
            .find(|game| game.type_name() == Some(name) || game.database_name() == Some(name))
            .unwrap_or(GameType::Unknown)
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lobbies that appear as a server type in player status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LobbyType {
    Main,
    Tournament,
}

impl LobbyType {
    pub fn type_name(self) -> &'static str {
        match self {
            LobbyType::Main => "MAIN",
            LobbyType::Tournament => "TOURNAMENT",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LobbyType::Main => "Main Lobby",
            LobbyType::Tournament => "Tournament Lobby",
        }
    }

    pub fn from_name(name: &str) -> Option<LobbyType> {
        [LobbyType::Main, LobbyType::Tournament]
            .into_iter()
            .find(|lobby| lobby.type_name() == name)
    }
}

/// The kind of server a player is on: a game, a lobby, or something this
/// client does not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerType {
    Game(GameType),
    Lobby(LobbyType),
    Unknown,
}

impl ServerType {
    /// Games take precedence over lobbies; anything else is `Unknown`.
    pub fn from_name(name: &str) -> ServerType {
        match GameType::from_name(name) {
            GameType::Unknown => LobbyType::from_name(name)
                .map(ServerType::Lobby)
                .unwrap_or(ServerType::Unknown),
            game => ServerType::Game(game),
        }
    }

    pub fn type_name(self) -> Option<&'static str> {
        match self {
            ServerType::Game(game) => game.type_name(),
            ServerType::Lobby(lobby) => Some(lobby.type_name()),
            ServerType::Unknown => None,
        }
    }
}

impl fmt::Display for ServerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerType::Game(game) => f.write_str(game.display_name()),
            ServerType::Lobby(lobby) => f.write_str(lobby.display_name()),
            ServerType::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Slow-changing reference data served under `resources/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Achievements,
    Challenges,
    Quests,
    GuildAchievements,
    VanityPets,
    VanityCompanions,
    SkyBlockCollections,
    SkyBlockSkills,
}

impl ResourceType {
    pub fn path(self) -> &'static str {
        match self {
            ResourceType::Achievements => "achievements",
            ResourceType::Challenges => "challenges",
            ResourceType::Quests => "quests",
            ResourceType::GuildAchievements => "guilds/achievements",
            ResourceType::VanityPets => "vanity/pets",
            ResourceType::VanityCompanions => "vanity/companions",
            ResourceType::SkyBlockCollections => "skyblock/collections",
            ResourceType::SkyBlockSkills => "skyblock/skills",
        }
    }
}
