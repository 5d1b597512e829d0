//! Sign-up Form Demo
//!
//! Drives a small sign-up form through the controllers without a renderer:
//! - Textarea bio with a character limit
//! - Select for the plan
//! - Checkbox for the terms, with a custom rule
//! - Submit button that opens a confirmation modal
//!
//! View-models are printed as JSON, the way a rendering layer would receive them.
//!
//! Run with: RUST_LOG=debug cargo run -p plinth_cn --example form_demo

use anyhow::Result;
use plinth_cn::prelude::*;
use plinth_theme::ThemeConfig;

const THEME: &str = r##"
scheme = "dark"
radius_scale = 1.5

[colors]
primary = "#7C3AED"
"##;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
enum Plan {
    Hobby,
    Team,
    Enterprise,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let theme = ThemeState::from_config(&ThemeConfig::from_toml_str(THEME)?)?;
    ThemeState::install(theme);

    pollster::block_on(run())
}

async fn run() -> Result<()> {
    let mut bio = TextareaController::new(
        cn::textarea()
            .placeholder("Tell us about yourself")
            .required(true)
            .min_length(10)
            .max_length(160),
    )?;

    let mut plan = SelectController::new(
        cn::select()
            .option(SelectOption::new(Plan::Hobby, "Hobby"))
            .option(SelectOption::new(Plan::Team, "Team"))
            .option(SelectOption::new(Plan::Enterprise, "Enterprise").disabled(true))
            .required(true),
    )?;

    let mut terms = CheckboxController::new(cn::checkbox().label("I accept the terms").required(true))?;
    terms.add_rule(rule(|cb| {
        cb.is_indeterminate()
            .then(|| "Please make a clear choice".to_string())
    }));

    let submit = ButtonController::new(cn::button().variant(ButtonVariant::Primary))?;
    let mut confirm = ModalController::new(cn::modal().title("Create account?"))?;

    // Submitting an empty form surfaces every error
    let errors = validate_form(&mut bio, &mut plan, &mut terms)?;
    tracing::info!(?errors, "empty form rejected");

    let on_bio_change = handler_fn(|value: String| {
        tracing::debug!(chars = value.chars().count(), "bio autosaved");
        Ok(())
    });
    let change = bio
        .set_value("Rustacean who builds UI kits.", Some(&on_bio_change))
        .await?;
    tracing::info!(remaining = ?change.remaining_characters, words = change.word_count, "bio updated");

    let on_plan_change = handler(|plan: Plan| async move {
        tracing::debug!(?plan, "plan synced");
        Ok::<(), CallbackError>(())
    });
    plan.toggle_menu()?;
    if let Err(err) = plan.set_value(Plan::Enterprise, Some(&on_plan_change)).await {
        tracing::warn!(%err, "enterprise plan is not selectable");
    }
    plan.set_value(Plan::Team, Some(&on_plan_change)).await?;

    terms.on_toggle(None).await?;

    let errors = validate_form(&mut bio, &mut plan, &mut terms)?;
    anyhow::ensure!(errors.is_empty(), "form still invalid: {errors:?}");

    let mut open_requested = false;
    if submit.view_model().interactive {
        confirm.on_open(None).await?;
        confirm.on_animation_end()?;
        open_requested = true;
    }
    tracing::info!(open_requested, "confirmation shown");

    println!("{}", serde_json::to_string_pretty(&bio.view_model())?);
    println!("{}", serde_json::to_string_pretty(&plan.view_model())?);
    println!("{}", serde_json::to_string_pretty(&terms.view_model())?);
    println!("{}", serde_json::to_string_pretty(&confirm.view_model())?);

    let dismissed = confirm.on_escape(None).await?;
    tracing::info!(dismissed, "confirmation dismissed");

    Ok(())
}

fn validate_form(
    bio: &mut TextareaController,
    plan: &mut SelectController<Plan>,
    terms: &mut CheckboxController,
) -> Result<Vec<String>> {
    let mut errors = Vec::new();
    errors.extend(bio.validate()?.error_message);
    errors.extend(plan.validate()?.error_message);
    errors.extend(terms.validate()?);
    Ok(errors)
}
