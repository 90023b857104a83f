// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `SwitchBot` API surface.
//!
//! Each operation issues exactly one HTTP request, decodes the response
//! envelope and returns the typed payload.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::capabilities::RemoteCapabilities;
use crate::command::{Command, CommandRequest};
use crate::error::{Error, Result, TransportError};
use crate::protocol::{ApiConfig, ApiResponse, HttpClient, Transport};
use crate::remote::RemoteDevice;
use crate::response::{CommandAck, DeviceList, DeviceStatus, Envelope, Scene};

/// Client for the `SwitchBot` cloud API.
///
/// # Type Parameter
///
/// `T` is the transport; [`HttpClient`] unless a custom [`Transport`] is
/// supplied with [`SwitchBot::from_transport`].
///
/// # Examples
///
/// ```no_run
/// use switchbot_lib::SwitchBot;
///
/// # async fn example() -> switchbot_lib::Result<()> {
/// let client = SwitchBot::new("my-access-token")?;
///
/// let devices = client.get_device_list().await?;
/// for remote in &devices.infrared_remote_list {
///     println!("{} ({})", remote.device_name, remote.remote_type);
/// }
///
/// let scenes = client.get_scene_list().await?;
/// if let Some(scene) = scenes.first() {
///     client.execute_scene(&scene.scene_id).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SwitchBot<T = HttpClient> {
    transport: T,
}

impl SwitchBot<HttpClient> {
    /// Creates a client for the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the HTTP
    /// client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(ApiConfig::new(token))
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid.
    pub fn with_config(config: ApiConfig) -> Result<Self> {
        Ok(Self::from_transport(config.into_client()?))
    }
}

impl<T: Transport> SwitchBot<T> {
    /// Creates a client on top of an existing transport.
    #[must_use]
    pub fn from_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Lists the physical devices and infrared remotes on the account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server reports a failure.
    pub async fn get_device_list(&self) -> Result<DeviceList> {
        self.get("/v1.0/devices").await
    }

    /// Fetches the live status of a physical device.
    ///
    /// The returned variant follows the `deviceType` reported by the server.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server reports a failure.
    pub async fn get_device_status(&self, device_id: &str) -> Result<DeviceStatus> {
        let path = format!("/v1.0/devices/{}/status", urlencoding::encode(device_id));
        self.get(&path).await
    }

    /// Sends a control command to a physical device or infrared remote.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server reports a failure.
    pub async fn send_control_command<C: Command + ?Sized>(
        &self,
        device_id: &str,
        command: &C,
    ) -> Result<CommandAck> {
        let path = format!("/v1.0/devices/{}/commands", urlencoding::encode(device_id));
        let request: CommandRequest = command.to_request();
        tracing::debug!(
            device_id,
            command = %request.command,
            "Sending control command"
        );
        self.post(&path, Some(&request)).await
    }

    /// Lists the manual scenes on the account.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server reports a failure.
    pub async fn get_scene_list(&self) -> Result<Vec<Scene>> {
        self.get("/v1.0/scenes").await
    }

    /// Executes a manual scene.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the server reports a failure.
    pub async fn execute_scene(&self, scene_id: &str) -> Result<CommandAck> {
        let path = format!("/v1.0/scenes/{}/execute", urlencoding::encode(scene_id));
        tracing::debug!(scene_id, "Executing scene");
        self.post::<_, ()>(&path, None).await
    }

    /// Returns a façade for the infrared remote `device_id`.
    #[must_use]
    pub fn remote(
        &self,
        device_id: impl Into<String>,
        capabilities: RemoteCapabilities,
    ) -> RemoteDevice<'_, T> {
        RemoteDevice::new(self, device_id, capabilities)
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        decode(self.transport.get(path).await)
    }

    async fn post<R: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<R> {
        decode(self.transport.post(path, body).await)
    }
}

/// Turns a transport result into the payload of a success envelope.
///
/// Error responses that still carry a structured envelope (such as a 401
/// with `{"message": "Unauthorized"}`) are decoded like 2xx ones.
fn decode<R: DeserializeOwned>(
    result: std::result::Result<ApiResponse, TransportError>,
) -> Result<R> {
    match result {
        Ok(response) => Envelope::parse(response.body())?.into_body(),
        Err(TransportError::Status { status, body }) => match Envelope::parse(&body) {
            Ok(envelope) if envelope.is_failure() => envelope.into_body(),
            _ => Err(Error::Transport(TransportError::Status { status, body })),
        },
        Err(err) => Err(err.into()),
    }
}
