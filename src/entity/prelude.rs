//! 预导入模块，方便使用

pub use super::baseline_scores::{
    ActiveModel as BaselineScoreActiveModel, Entity as BaselineScores,
    Model as BaselineScoreModel,
};
pub use super::challenge_coverages::{
    ActiveModel as ChallengeCoverageActiveModel, Entity as ChallengeCoverages,
    Model as ChallengeCoverageModel,
};
pub use super::challenges::{
    ActiveModel as ChallengeActiveModel, Entity as Challenges, Model as ChallengeModel,
};
pub use super::hackathon_roles::{
    ActiveModel as HackathonRoleActiveModel, Entity as HackathonRoles,
    Model as HackathonRoleModel,
};
pub use super::hackathons::{
    ActiveModel as HackathonActiveModel, Entity as Hackathons, Model as HackathonModel,
};
pub use super::judge_assignments::{
    ActiveModel as JudgeAssignmentActiveModel, Entity as JudgeAssignments,
    Model as JudgeAssignmentModel,
};
pub use super::judging_entries::{
    ActiveModel as JudgingEntryActiveModel, Entity as JudgingEntries,
    Model as JudgingEntryModel,
};
pub use super::prizes::{ActiveModel as PrizeActiveModel, Entity as Prizes, Model as PrizeModel};
pub use super::project_challenges::{
    ActiveModel as ProjectChallengeActiveModel, Entity as ProjectChallenges,
    Model as ProjectChallengeModel,
};
pub use super::projects::{
    ActiveModel as ProjectActiveModel, Entity as Projects, Model as ProjectModel,
};
pub use super::roles::{ActiveModel as RoleActiveModel, Entity as Roles, Model as RoleModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
