use gpui::Entity;

pub mod panel_entity;
pub mod settings_entity;

#[derive(Debug, Clone)]
pub struct DataEntities {
    pub settings: Entity<settings_entity::SettingsEntity>,
    pub panel: Entity<panel_entity::PanelEntity>,
}
