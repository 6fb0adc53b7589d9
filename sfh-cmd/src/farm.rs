//! Farm and greenhouse commands.

use anyhow::{anyhow, bail, Context};
use log::info;
use serde::Serialize;
use sfh_core::analysis::ImageFile;
use sfh_core::backend::FarmBackend;
use sfh_core::client::HttpClient;
use sfh_presenter::detail::BarDetail;
use sfh_presenter::groups::GroupLayout;
use sfh_presenter::{ops, GreenhousePresenter};
use std::path::{Path, PathBuf};

/// One CSV row per crop group.
#[derive(Debug, PartialEq, Serialize)]
pub struct GroupRow {
    pub group_id: i64,
    pub crop: String,
    pub axis: String,
    pub position: Option<usize>,
    pub cells: usize,
    pub length: String,
    pub harvest_amount: Option<i64>,
    pub total_amount: Option<i64>,
    pub harvest_ratio: Option<i64>,
    pub unripe: Option<u32>,
    pub rotten_found: Option<bool>,
}

/// Rows in display order.
pub fn group_rows(layout: &GroupLayout) -> Vec<GroupRow> {
    layout
        .groups()
        .iter()
        .map(|group| {
            let detail = BarDetail::for_group(group);
            GroupRow {
                group_id: group.id,
                crop: detail.crop.label(),
                axis: detail.position_label().to_string(),
                position: detail.position,
                cells: group.len(),
                length: detail.length,
                harvest_amount: detail.harvest_amount,
                total_amount: detail.total_amount,
                harvest_ratio: detail.harvest_ratio,
                unripe: detail.analysis.map(|a| a.unripe),
                rotten_found: detail.analysis.map(|a| a.rotten_found),
            }
        })
        .collect()
}

/// Load the farm and select `greenhouse_id` with its grid, groups and
/// sensor reading.
async fn open_greenhouse(
    client: &HttpClient,
    farm_id: i64,
    greenhouse_id: i64,
) -> anyhow::Result<GreenhousePresenter> {
    let mut presenter = GreenhousePresenter::new(farm_id);
    let context = ops::fetch_farm_context(client, farm_id).await;
    presenter.apply_farm_context(context);
    if let Some(message) = presenter.error() {
        bail!("Failed to load farm {}: {}", farm_id, message);
    }
    if !ops::drive_select_greenhouse(&mut presenter, client, greenhouse_id).await {
        bail!("Greenhouse {} is not part of farm {}", greenhouse_id, farm_id);
    }
    if let Some(message) = presenter.error() {
        bail!("Failed to load greenhouse {}: {}", greenhouse_id, message);
    }
    Ok(presenter)
}

fn print_groups(layout: &GroupLayout) {
    for row in group_rows(layout) {
        println!(
            "{:>6}  {:<6} {} {:>3}  {:>6}  harvest {}/{}",
            row.group_id,
            row.crop,
            row.axis,
            row.position.map(|p| p.to_string()).unwrap_or_else(|| "-".into()),
            row.length,
            row.harvest_amount.map(|a| a.to_string()).unwrap_or_else(|| "-".into()),
            row.total_amount.map(|a| a.to_string()).unwrap_or_else(|| "-".into()),
        );
    }
}

pub async fn list_greenhouses(client: &HttpClient, farm_id: i64) -> anyhow::Result<()> {
    let farm = client.farm(farm_id).await?;
    let greenhouses = client.greenhouses(farm_id).await?;
    println!("{} ({})", farm.name, farm.location);
    for greenhouse in &greenhouses {
        println!("{:>6}  {}", greenhouse.id, greenhouse.name);
    }
    info!("{} greenhouses in farm {}", greenhouses.len(), farm_id);
    Ok(())
}

pub async fn show_groups(
    client: &HttpClient,
    farm_id: i64,
    greenhouse_id: i64,
    csv_path: Option<&Path>,
) -> anyhow::Result<()> {
    let presenter = open_greenhouse(client, farm_id, greenhouse_id).await?;
    let layout = presenter.layout();
    match csv_path {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            for row in group_rows(layout) {
                writer.serialize(row)?;
            }
            writer.flush()?;
            info!("Wrote {} groups to {}", layout.groups().len(), path.display());
        }
        None => print_groups(layout),
    }
    Ok(())
}

pub async fn capture(
    client: &HttpClient,
    farm_id: i64,
    greenhouse_id: i64,
    group_id: i64,
    iot_id: i64,
    wait: bool,
) -> anyhow::Result<()> {
    let mut presenter = open_greenhouse(client, farm_id, greenhouse_id).await?;

    let devices = client.iot_devices().await;
    if !presenter.open_capture(devices) {
        let reason = presenter
            .take_notice()
            .or_else(|| presenter.error().map(str::to_string))
            .unwrap_or_default();
        bail!("Cannot start capture: {}", reason);
    }
    presenter.choose_device(iot_id);
    if !presenter.confirm_device() {
        bail!("IoT device {} is not subscribed", iot_id);
    }
    presenter.toggle_capture_target(group_id);
    if presenter.capture().target() != Some(group_id) {
        bail!("Group {} is unknown or a path", group_id);
    }

    if wait {
        let refreshed = ops::drive_capture(&mut presenter, client, tokio::time::sleep).await;
        let notice = presenter.take_notice().unwrap_or_default();
        if !refreshed {
            bail!("{}", notice);
        }
        println!("{}", notice);
        print_groups(presenter.layout());
    } else {
        let (ticket, request) = presenter
            .confirm_capture()
            .ok_or_else(|| anyhow!("Capture is not ready"))?;
        let result = client.capture(&request).await;
        let sent = presenter.apply_capture(ticket, request, result).is_some();
        let notice = presenter.take_notice().unwrap_or_default();
        if !sent {
            bail!("{}", notice);
        }
        println!("{}", notice);
    }
    Ok(())
}

pub async fn upload(
    client: &HttpClient,
    farm_id: i64,
    greenhouse_id: i64,
    group_id: i64,
    files: &[PathBuf],
) -> anyhow::Result<()> {
    let mut presenter = open_greenhouse(client, farm_id, greenhouse_id).await?;

    let mut images = Vec::with_capacity(files.len());
    for path in files {
        let bytes =
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        images.push(ImageFile::new(name, bytes));
    }

    presenter.open_upload();
    presenter.toggle_upload_target(group_id);
    if presenter.upload().target() != Some(group_id) {
        bail!("Group {} is unknown or a path", group_id);
    }
    presenter.select_upload_files(images);

    let succeeded = ops::drive_upload(&mut presenter, client).await;
    let notice = presenter.take_notice().unwrap_or_default();
    if !succeeded {
        bail!("{}", notice);
    }
    if let Some(result) = presenter.upload().result() {
        println!(
            "{} files: {} fruits, {} ripe, {} unripe, rotten: {}",
            result.total_files,
            result.total_count,
            result.total_ripe,
            result.total_unripe,
            if result.has_rotten { "yes" } else { "no" }
        );
    }
    print_groups(presenter.layout());
    Ok(())
}

pub async fn set_cell(
    client: &HttpClient,
    farm_id: i64,
    greenhouse_id: i64,
    row: usize,
    col: usize,
    value: u8,
) -> anyhow::Result<()> {
    let mut presenter = open_greenhouse(client, farm_id, greenhouse_id).await?;
    if !presenter.begin_edit() {
        bail!("Greenhouse {} has no grid", greenhouse_id);
    }
    presenter.edit_cell(row, col, value)?;
    if !ops::drive_save_grid(&mut presenter, client).await {
        let reason = presenter.error().unwrap_or_default().to_string();
        bail!("Failed to save grid: {}", reason);
    }
    info!("Saved ({}, {}) = {} in greenhouse {}", row, col, value, greenhouse_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sfh_core::group::GroupsResponse;

    fn layout() -> GroupLayout {
        let response: GroupsResponse = serde_json::from_value(json!({
            "axis": "row",
            "groups": [
                {"id": 2, "crop_type": 2, "is_horizontal": true, "group_cells": [[1, 0], [1, 1], [1, 2]],
                 "harvest_amount": 3, "total_amount": 4,
                 "last_analysis_result": {"unripe": 5, "rotten": "부패 발견"}},
                {"id": 1, "crop_type": 1, "is_horizontal": true, "group_cells": [[0, 0], [0, 1]]}
            ]
        }))
        .unwrap();
        GroupLayout::new(response)
    }

    #[test]
    fn rows_follow_display_order() {
        let rows = group_rows(&layout());
        assert_eq!(rows.iter().map(|r| r.group_id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(rows[0].position, Some(1));
        assert_eq!(rows[0].length, "20cm");
        assert_eq!(rows[0].unripe, None);
    }

    #[test]
    fn rows_carry_amounts_and_analysis() {
        let rows = group_rows(&layout());
        let tomato = &rows[1];
        assert_eq!(tomato.crop, "토마토");
        assert_eq!(tomato.harvest_ratio, Some(75));
        assert_eq!(tomato.unripe, Some(5));
        assert_eq!(tomato.rotten_found, Some(true));
    }

    #[test]
    #[test]
    fn rows_follow_each_group_orientation() {
        let response: GroupsResponse = serde_json::from_value(json!({
            "axis": "row",
            "groups": [
                {"id": 5, "crop_type": 1, "is_horizontal": false, "group_cells": [[0, 3], [1, 3], [2, 3]]}
            ]
        }))
        .unwrap();
        let rows = group_rows(&GroupLayout::new(response));
        assert_eq!(rows[0].axis, "열 번호");
        assert_eq!(rows[0].position, Some(4));
    }

    #[test]
    fn csv_has_header_and_one_line_per_group() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for row in group_rows(&layout()) {
            writer.serialize(row).unwrap();
        }
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("group_id,crop,axis,position"));
    }
}
