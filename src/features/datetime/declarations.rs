use crate::config::AppConfig;
use crate::features::apps::{
    Binding, Call, Expand, ExpandLevel, Field, Form, HttpDeploy, LOCATION_CHANNEL_HEADER,
    LOCATION_COMMAND, Manifest, Permission,
};

pub const APP_ID: &str = "datetime";
pub const APP_VERSION: &str = "v0.1.0";
pub const DISPLAY_NAME: &str = "Datetime All over The World";
pub const HOMEPAGE_URL: &str = "https://github.com/caunu-s/mattermost-sample-time-app";
pub const ICON_NAME: &str = "icon.png";
pub const SEND_PATH: &str = "/send";
pub const TIMEZONE_FIELD: &str = "Timezone";

pub static ICON_PNG: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icon.png"));

/// Everything the app declares to Mattermost. Built once at startup and
/// only read afterwards.
#[derive(Debug, Clone)]
pub struct AppDeclarations {
    pub manifest: Manifest,
    pub bindings: Vec<Binding>,
}

impl AppDeclarations {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            manifest: build_manifest(&config.root_url),
            bindings: build_bindings(),
        }
    }
}

pub fn build_manifest(root_url: &str) -> Manifest {
    Manifest {
        app_id: APP_ID.to_string(),
        version: APP_VERSION.to_string(),
        display_name: DISPLAY_NAME.to_string(),
        icon: ICON_NAME.to_string(),
        homepage_url: HOMEPAGE_URL.to_string(),
        requested_permissions: vec![Permission::ActAsBot, Permission::ActAsUser],
        requested_locations: vec![
            LOCATION_CHANNEL_HEADER.to_string(),
            LOCATION_COMMAND.to_string(),
        ],
        http: HttpDeploy {
            root_url: root_url.to_string(),
        },
    }
}

pub fn build_send_form() -> Form {
    Form {
        title: DISPLAY_NAME.to_string(),
        icon: ICON_NAME.to_string(),
        fields: vec![Field {
            field_type: "text".to_string(),
            name: TIMEZONE_FIELD.to_string(),
        }],
        submit: Call {
            path: SEND_PATH.to_string(),
            expand: Some(Expand {
                acting_user: Some(ExpandLevel::Id),
                acting_user_access_token: Some(ExpandLevel::All),
            }),
        },
    }
}

pub fn build_bindings() -> Vec<Binding> {
    let send_form = build_send_form();

    let channel_header = Binding {
        location: Some(LOCATION_CHANNEL_HEADER.to_string()),
        bindings: vec![Binding {
            location: Some("send-button".to_string()),
            icon: Some(ICON_NAME.to_string()),
            label: Some("check datetime".to_string()),
            form: Some(send_form.clone()),
            ..Binding::default()
        }],
        ..Binding::default()
    };

    let command = Binding {
        location: Some(LOCATION_COMMAND.to_string()),
        bindings: vec![Binding {
            icon: Some(ICON_NAME.to_string()),
            label: Some("datetime".to_string()),
            description: Some("Datetime app".to_string()),
            hint: Some("[send]".to_string()),
            bindings: vec![Binding {
                label: Some("send".to_string()),
                form: Some(send_form),
                ..Binding::default()
            }],
            ..Binding::default()
        }],
        ..Binding::default()
    };

    vec![channel_header, command]
}
