use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create lookup indexes and install the grade validator.
    Setup,
    /// Create a grade from a JSON document.
    Create(CreateArgs),
    /// Get a grade by ID.
    Get(IdArgs),
    /// Delete a grade by ID.
    Delete(IdArgs),
    /// Append a score to a grade.
    AddScore(AddScoreArgs),
    /// Remove every score matching the given fields.
    RemoveScore(RemoveScoreArgs),
    /// List a learner's grades.
    #[command(alias = "student")]
    Learner(LearnerArgs),
    /// Delete every grade of a learner.
    DeleteLearner(IdArgs),
    /// List a class's grades.
    Class(ClassArgs),
    /// Move every grade of a class to another class ID.
    MoveClass(MoveClassArgs),
    /// Delete every grade of a class.
    DeleteClass(IdArgs),
    /// Learners whose mean score is above a threshold.
    Stats(StatsArgs),
    /// Print the JSON Schema for a payload type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct IdArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    /// Grade document, e.g. '{"learner_id": 1, "class_id": 2, "scores": []}'
    pub json: String,
}

#[derive(Clone, Debug, Args)]
pub struct AddScoreArgs {
    pub id: String,
    #[arg(long = "type")]
    pub kind: String,
    #[arg(long, allow_negative_numbers = true)]
    pub score: f64,
}

#[derive(Clone, Debug, Args)]
pub struct RemoveScoreArgs {
    pub id: String,
    #[arg(long = "type")]
    pub kind: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub score: Option<f64>,
}

#[derive(Clone, Debug, Args)]
pub struct LearnerArgs {
    pub id: String,
    /// Only grades in this class.
    #[arg(long)]
    pub class: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ClassArgs {
    pub id: String,
    /// Only grades of this learner.
    #[arg(long)]
    pub learner: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct MoveClassArgs {
    pub id: String,
    #[arg(long)]
    pub to: String,
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Restrict to one class.
    #[arg(long)]
    pub class: Option<String>,
    /// Override the configured threshold.
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,
    /// Override the configured total-count basis: population or qualifying.
    #[arg(long)]
    pub total_count: Option<String>,
    /// Report the qualifying count as the total, as older reports did.
    #[arg(long, conflicts_with = "total_count")]
    pub legacy_total: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Registered schema name, e.g. `grade_document`.
    pub name: String,
}
