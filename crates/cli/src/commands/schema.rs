use miette::IntoDiagnostic;

#[tracing::instrument(skip_all)]
pub fn schema() -> miette::Result<()> {
    let schema = serde_json::to_string_pretty(&partkit_go::schema()).into_diagnostic()?;

    println!("{schema}");

    Ok(())
}
