// Skill matching: one scorer shared by the job card, job list, saved jobs and recommendations.
// Pure and synchronous; handlers are the only async code here.

pub mod handlers;
pub mod ranking;
pub mod scorer;
pub mod tier;
