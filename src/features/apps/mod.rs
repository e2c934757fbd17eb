pub mod dto;

pub use dto::{
    Binding, Call, CallRequest, CallResponse, CallResponseType, Expand, ExpandLevel, Field, Form,
    HttpDeploy, LOCATION_CHANNEL_HEADER, LOCATION_COMMAND, Manifest, Permission,
};
