diesel::table! {
    notes (id) {
        id -> Varchar,
        message -> Text,
        signature -> Text,
        timestamp -> Int8,
    }
}
