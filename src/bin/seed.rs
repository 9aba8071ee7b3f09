use anyhow::Context;
use dotenvy::dotenv;

use camp::database::{self, schema};
use camp::services::activity_service::{self, NewActivityInput};
use camp::services::camper_service::{self, NewCamperInput};
use camp::services::signup_service::{self, NewSignupInput};
use camp::{logging, AppConfig};

const CAMPERS: &[(&str, i64)] = &[
    ("Caitlin", 8),
    ("Lizzie", 9),
    ("Ashley", 11),
    ("Nicholas", 13),
    ("Zoe", 15),
    ("Ben", 18),
];

const ACTIVITIES: &[(&str, i64)] = &[
    ("Archery", 2),
    ("Swimming", 3),
    ("Hiking", 4),
    ("Canoeing", 5),
    ("Arts and Crafts", 1),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    logging::init_tracing();

    let config = AppConfig::from_env();
    let pool = database::connect(&config.database_url)
        .await
        .with_context(|| format!("cannot connect to {}", config.database_url))?;
    schema::ensure_schema(&pool).await.context("cannot create schema")?;
    schema::clear_all(&pool).await.context("cannot clear tables")?;

    let mut camper_ids = Vec::with_capacity(CAMPERS.len());
    for (name, age) in CAMPERS {
        let camper = camper_service::create_camper(
            &pool,
            NewCamperInput {
                name: Some(name.to_string()),
                age: Some(*age),
            },
        )
        .await?;
        camper_ids.push(camper.id);
    }

    let mut activity_ids = Vec::with_capacity(ACTIVITIES.len());
    for (name, difficulty) in ACTIVITIES {
        let activity = activity_service::create_activity(
            &pool,
            NewActivityInput {
                name: Some(name.to_string()),
                difficulty: Some(*difficulty),
            },
        )
        .await?;
        activity_ids.push(activity.id);
    }

    // Each camper takes two consecutive activities, starting mid-morning.
    let mut signups = 0;
    for (i, camper_id) in camper_ids.iter().enumerate() {
        for offset in 0..2 {
            let activity_id = activity_ids[(i + offset) % activity_ids.len()];
            signup_service::create_signup(
                &pool,
                NewSignupInput {
                    time: Some(9 + (i as i64 + offset as i64) % 12),
                    camper_id: Some(*camper_id),
                    activity_id: Some(activity_id),
                },
            )
            .await?;
            signups += 1;
        }
    }

    println!(
        "seed: campers={}, activities={}, signups={}",
        camper_ids.len(),
        activity_ids.len(),
        signups
    );
    Ok(())
}
