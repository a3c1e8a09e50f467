//! Diesel table definitions. Keep in step with `migrations/`.

diesel::table! {
    /// User records looked up by username.
    users (id) {
        /// Primary key as issued by the record owner.
        id -> Varchar,
        /// Unique login name; lookups match it exactly.
        username -> Varchar,
        /// Contact address, returned verbatim.
        email -> Varchar,
    }
}
