//! Diesel schema for task persistence.

diesel::table! {
    /// Task records keyed by identifier, with a unique title index.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Unique task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Workflow status literal.
        #[max_length = 50]
        status -> Varchar,
    }
}
