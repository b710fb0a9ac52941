use trophy_case_lib::{Platform, platform_link};

pub(crate) fn run_link(platform: Platform, id: &str, parent: Option<&str>) {
    if parent.is_some() && platform != Platform::RetroAchievements {
        log::warn!("--parent only applies to RetroAchievements subsets; ignoring it");
    }
    log::info!("{}", platform_link(platform, id, parent));
}
