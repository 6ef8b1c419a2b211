use lighthouse_core::{Level, Sample, SpError};

/// Root cause raised by the storage layer
#[allow(dead_code)]
pub fn db_layer() -> Sample {
    Sample::new("Failed to connect to database")
        .with_message("en", "Db connection failed")
        .with_hint("Check the database connection string")
        .with_level(Level::DeepDebug)
}

#[allow(dead_code)]
pub fn app_layer() -> Sample {
    Sample::new("Database error")
        .with_message("en", "App could not load the account")
        .with_hint("Inspect the repository logs")
        .with_level(Level::MediumDebug)
}

#[allow(dead_code)]
pub fn api_layer() -> Sample {
    Sample::new("Internal Error")
        .with_message("en", "Something went wrong")
        .with_message("ru", "Что-то пошло не так")
        .with_hint("Please try again later")
        .with_http_code(500)
        .with_level(Level::HighDebug)
}

/// DB → App → Api chain, Api outermost
#[allow(dead_code)]
pub fn three_layer_chain() -> SpError {
    SpError::new(db_layer())
        .unwrap()
        .wrap_new(app_layer())
        .unwrap()
        .wrap_new(api_layer())
        .unwrap()
}
