//! One repository per table. All methods are stateless async functions over
//! a `&PgPool`; identifiers in generated SQL come exclusively from hardcoded
//! literals in this module tree.

mod achievement_repo;
mod committee_repo;
mod countdown_repo;
mod event_repo;
mod gallery_repo;
mod setting_repo;
mod sponsor_repo;
mod stats_repo;
mod tournament_repo;
mod user_repo;

pub use achievement_repo::AchievementRepo;
pub use committee_repo::CommitteeRepo;
pub use countdown_repo::CountdownRepo;
pub use event_repo::EventRepo;
pub use gallery_repo::GalleryRepo;
pub use setting_repo::SettingRepo;
pub use sponsor_repo::SponsorRepo;
pub use stats_repo::StatsRepo;
pub use tournament_repo::TournamentRepo;
pub use user_repo::UserRepo;
