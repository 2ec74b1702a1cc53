//! # 启动器图标生成工具 — 命令行入口
//!
//! 以当前工作目录为项目根，读取 `app/src/main/res/logo_original.png`，
//! 生成 `mipmap-*` 下的 `ic_launcher.png` 与 `ic_launcher_round.png`。

use std::process::ExitCode;

use launcher_icons::error::AppError;
use launcher_icons::icon_generator::{
    DENSITIES, GenerationReport, IconConfig, IconGenerator, IconVariant,
};

fn run() -> Result<GenerationReport, AppError> {
    let cwd = std::env::current_dir()?;
    log::debug!("工作目录：{}", cwd.display());

    let generator = IconGenerator::new(IconConfig::with_base_dir(&cwd));
    Ok(generator.generate_icons()?)
}

fn print_summary(report: &GenerationReport) {
    println!("源图：{}", report.source.display());
    for density in DENSITIES {
        for icon in report.icons_for(density) {
            let variant = match icon.variant {
                IconVariant::Standard => "",
                IconVariant::Round => " round",
            };
            println!(
                "已生成 {}{}：{}x{} -> {}",
                density.label(),
                variant,
                icon.size,
                icon.size,
                icon.path.display()
            );
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) => {
            print_summary(&report);
            println!("\n✅ 全部图标生成成功！");
            println!("\n后续步骤：");
            println!("1. 图标已放入 app/src/main/res/mipmap-* 目录");
            println!("2. 重新构建应用即可看到新图标");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // 前置条件失败已在生成器内记录，这里只补记运行期错误
            if !err.is_precondition() {
                log::error!("图标生成中断: {err}");
            }
            eprintln!("错误：{}", err);
            eprintln!("提示：{}", err.hint());
            eprintln!("\n❌ 图标生成失败");
            ExitCode::FAILURE
        }
    }
}
