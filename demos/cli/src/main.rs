use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context};
use bloodcheck_core::{ProfileId, SexCategory, ViewState};
use bloodcheck_panel::{build_report, render_report_text, ReferenceCatalog};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "bloodcheck-cli",
    about = "Đánh giá chỉ số xét nghiệm máu theo hồ sơ tham chiếu và in báo cáo."
)]
struct Args {
    /// Hồ sơ xét nghiệm: basic, extended, hormone hoặc vital.
    #[arg(short, long, default_value = "basic")]
    profile: String,

    /// Giới tính tra khoảng tham chiếu: male hoặc female.
    #[arg(short, long, default_value = "male")]
    sex: String,

    /// File JSON dạng map key -> giá trị đã đo.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Gán trực tiếp một giá trị, dạng key=value. Lặp lại được.
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// In tài liệu báo cáo dạng JSON thay vì văn bản.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let profile = ProfileId::from_key(&args.profile)?;
    let sex = SexCategory::from_key(&args.sex);

    let catalog = ReferenceCatalog::standard();
    let mut view = ViewState::new(profile, sex);

    if let Some(path) = &args.input {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Không đọc được file {path:?}"))?;
        view.values = serde_json::from_str::<HashMap<String, String>>(&data)
            .with_context(|| format!("File {path:?} không phải JSON map key -> giá trị"))?;
    }

    for pair in &args.set {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("--set cần dạng key=value, nhận được: {pair}");
        };
        catalog
            .analyte(profile, key)
            .with_context(|| format!("--set {pair}"))?;
        view.set_value(key, value);
    }

    let report = build_report(&catalog, &view);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report_text(&report));
    }

    Ok(())
}
