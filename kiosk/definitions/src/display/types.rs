//! Display service messages.
//!
//! Field names follow the JSON mapping of the service (lowerCamelCase on
//! the wire). Request messages are built through their `builder()`; the
//! `Display` impls render the compact one-line text form samples print.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The empty message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Empty {}

/// Screen dimensions of a kiosk, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

/// A geographic position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// A kiosk enrolled for sign display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Kiosk {
    /// Server-assigned identifier.
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ScreenSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
    /// RFC 3339 creation timestamp, set by the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl Kiosk {
    pub fn builder() -> KioskBuilder {
        KioskBuilder::default()
    }
}

impl fmt::Display for Kiosk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {} name: {:?}", self.id, self.name)?;
        if let Some(size) = &self.size {
            write!(f, " size {{ width: {} height: {} }}", size.width, size.height)?;
        }
        if let Some(location) = &self.location {
            write!(
                f,
                " location {{ latitude: {} longitude: {} }}",
                location.latitude, location.longitude
            )?;
        }
        if let Some(create_time) = &self.create_time {
            write!(f, " create_time: {:?}", create_time)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KioskBuilder {
    kiosk: Kiosk,
}

impl KioskBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.kiosk.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.kiosk.name = name.into();
        self
    }

    pub fn size(mut self, width: i32, height: i32) -> Self {
        self.kiosk.size = Some(ScreenSize { width, height });
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.kiosk.location = Some(LatLng { latitude, longitude });
        self
    }

    pub fn build(self) -> Kiosk {
        self.kiosk
    }
}

/// A sign that can be shown on kiosks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Sign {
    /// Server-assigned identifier.
    pub id: i32,
    pub name: String,
    pub text: String,
    /// Base64-encoded image shown with the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl Sign {
    pub fn builder() -> SignBuilder {
        SignBuilder::default()
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id: {} name: {:?} text: {:?}", self.id, self.name, self.text)?;
        if let Some(create_time) = &self.create_time {
            write!(f, " create_time: {:?}", create_time)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignBuilder {
    sign: Sign,
}

impl SignBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.sign.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.sign.name = name.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.sign.text = text.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.sign.image = Some(image.into());
        self
    }

    pub fn build(self) -> Sign {
        self.sign
    }
}

/// Response of `ListKiosks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListKiosksResponse {
    pub kiosks: Vec<Kiosk>,
}

/// Response of `ListSigns`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListSignsResponse {
    pub signs: Vec<Sign>,
}

/// Request of `GetKiosk`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetKioskRequest {
    pub id: i32,
}

impl GetKioskRequest {
    pub fn builder() -> GetKioskRequestBuilder {
        GetKioskRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetKioskRequestBuilder {
    id: i32,
}

impl GetKioskRequestBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn build(self) -> GetKioskRequest {
        GetKioskRequest { id: self.id }
    }
}

/// Request of `DeleteKiosk`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteKioskRequest {
    pub id: i32,
}

impl DeleteKioskRequest {
    pub fn builder() -> DeleteKioskRequestBuilder {
        DeleteKioskRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteKioskRequestBuilder {
    id: i32,
}

impl DeleteKioskRequestBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn build(self) -> DeleteKioskRequest {
        DeleteKioskRequest { id: self.id }
    }
}

/// Request of `GetSign`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetSignRequest {
    pub id: i32,
}

impl GetSignRequest {
    pub fn builder() -> GetSignRequestBuilder {
        GetSignRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetSignRequestBuilder {
    id: i32,
}

impl GetSignRequestBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn build(self) -> GetSignRequest {
        GetSignRequest { id: self.id }
    }
}

/// Request of `DeleteSign`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteSignRequest {
    pub id: i32,
}

impl DeleteSignRequest {
    pub fn builder() -> DeleteSignRequestBuilder {
        DeleteSignRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteSignRequestBuilder {
    id: i32,
}

impl DeleteSignRequestBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn build(self) -> DeleteSignRequest {
        DeleteSignRequest { id: self.id }
    }
}

/// Request of `SetSignIdForKioskIds`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SetSignIdForKioskIdsRequest {
    pub kiosk_ids: Vec<i32>,
    pub sign_id: i32,
}

impl SetSignIdForKioskIdsRequest {
    pub fn builder() -> SetSignIdForKioskIdsRequestBuilder {
        SetSignIdForKioskIdsRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SetSignIdForKioskIdsRequestBuilder {
    request: SetSignIdForKioskIdsRequest,
}

impl SetSignIdForKioskIdsRequestBuilder {
    pub fn sign_id(mut self, sign_id: i32) -> Self {
        self.request.sign_id = sign_id;
        self
    }

    pub fn kiosk_ids(mut self, kiosk_ids: impl IntoIterator<Item = i32>) -> Self {
        self.request.kiosk_ids = kiosk_ids.into_iter().collect();
        self
    }

    /// Appends one kiosk id.
    pub fn add_kiosk_id(mut self, kiosk_id: i32) -> Self {
        self.request.kiosk_ids.push(kiosk_id);
        self
    }

    pub fn build(self) -> SetSignIdForKioskIdsRequest {
        self.request
    }
}

/// Request of `GetSignIdForKioskId`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetSignIdForKioskIdRequest {
    pub kiosk_id: i32,
}

impl GetSignIdForKioskIdRequest {
    pub fn builder() -> GetSignIdForKioskIdRequestBuilder {
        GetSignIdForKioskIdRequestBuilder::default()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GetSignIdForKioskIdRequestBuilder {
    kiosk_id: i32,
}

impl GetSignIdForKioskIdRequestBuilder {
    pub fn kiosk_id(mut self, kiosk_id: i32) -> Self {
        self.kiosk_id = kiosk_id;
        self
    }

    pub fn build(self) -> GetSignIdForKioskIdRequest {
        GetSignIdForKioskIdRequest {
            kiosk_id: self.kiosk_id,
        }
    }
}

/// Response of `GetSignIdForKioskId`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetSignIdResponse {
    pub sign_id: i32,
}

impl fmt::Display for GetSignIdResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sign_id: {}", self.sign_id)
    }
}
