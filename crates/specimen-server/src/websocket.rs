//! Reload notifications pushed to connected previews.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent to preview clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReloadMessage {
    /// Connection established
    Connected,

    /// The registry was reloaded; examples should be fetched again
    RegistryReloaded {
        /// Number of components in the new registry
        components: usize,
    },

    /// A reload was attempted but failed; the previous registry stays live
    ReloadFailed {
        /// Why loading failed
        message: String,
    },
}

/// Hub for broadcasting reload messages to all connected clients.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ReloadMessage>,
}

impl ReloadHub {
    /// Create a new hub.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Send a message to all connected clients.
    pub fn send(&self, msg: ReloadMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    /// Subscribe to reload messages.
    pub fn subscribe(&self) -> broadcast::Receiver<ReloadMessage> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

/// Client-side script that reloads the page when the registry changes.
pub fn reload_client_script(ws_path: &str) -> String {
    format!(
        r#"(function() {{
  'use strict';

  const url = (location.protocol === 'https:' ? 'wss://' : 'ws://') + location.host + '{}';
  let attempts = 0;

  function connect() {{
    const ws = new WebSocket(url);

    ws.onopen = function() {{
      attempts = 0;
    }};

    ws.onmessage = function(event) {{
      const msg = JSON.parse(event.data);
      switch (msg.type) {{
        case 'registry_reloaded':
          location.reload();
          break;
        case 'reload_failed':
          console.error('[specimen] Registry reload failed:', msg.message);
          break;
      }}
    }};

    ws.onclose = function() {{
      if (attempts < 10) {{
        attempts++;
        setTimeout(connect, 1000 * attempts);
      }}
    }};
  }}

  connect();
}})();
"#,
        ws_path
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        hub.send(ReloadMessage::RegistryReloaded { components: 3 });

        match rx.try_recv() {
            Ok(ReloadMessage::RegistryReloaded { components: 3 }) => {}
            other => panic!("Expected RegistryReloaded, got {:?}", other),
        }
    }

    #[test]
    fn send_without_subscribers_is_ignored() {
        let hub = ReloadHub::default();
        assert_eq!(hub.subscriber_count(), 0);
        hub.send(ReloadMessage::Connected);
    }

    #[test]
    fn serializes_messages() {
        let json = serde_json::to_string(&ReloadMessage::ReloadFailed {
            message: "bad yaml".to_string(),
        })
        .unwrap();

        assert_eq!(json, r#"{"type":"reload_failed","message":"bad yaml"}"#);
    }

    #[test]
    fn client_script_uses_socket_path() {
        let script = reload_client_script("/__reload");
        assert!(script.contains("location.host + '/__reload'"));
        assert!(script.contains("case 'registry_reloaded':"));
    }
}
