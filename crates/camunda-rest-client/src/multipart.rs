//! Multipart form encoding for deployment creation

use camunda_api_contract::NewDeployment;
use reqwest::multipart::{Form, Part};

use crate::error::CamundaResult;

const OCTET_STREAM: &str = "application/octet-stream";
const TEXT_PLAIN: &str = "text/plain";

/// Build the multipart/form-data body for POST /deployment/create.
///
/// Each resource file becomes an `application/octet-stream` part named
/// after the file; each set deployment option becomes a `text/plain`
/// part under its dashed form name.
pub fn deployment_form(deployment: &NewDeployment) -> CamundaResult<Form> {
    let mut form = Form::new();

    for resource in &deployment.resources {
        let part = Part::bytes(resource.data.clone())
            .file_name(resource.name.clone())
            .mime_str(OCTET_STREAM)?;
        form = form.part(resource.name.clone(), part);
    }

    if let Some(name) = &deployment.name {
        form = form.part("deployment-name", text_part(name)?);
    }
    if let Some(flag) = deployment.enable_duplicate_filtering {
        form = form.part("enable-duplicate-filtering", text_part(&flag.to_string())?);
    }
    if let Some(flag) = deployment.deploy_changed_only {
        form = form.part("deploy-changed-only", text_part(&flag.to_string())?);
    }
    if let Some(source) = &deployment.source {
        form = form.part("deployment-source", text_part(source)?);
    }
    if let Some(tenant_id) = &deployment.tenant_id {
        form = form.part("tenant-id", text_part(tenant_id)?);
    }

    Ok(form)
}

fn text_part(value: &str) -> CamundaResult<Part> {
    Ok(Part::text(value.to_string()).mime_str(TEXT_PLAIN)?)
}
