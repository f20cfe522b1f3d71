use std::sync::Arc;

use mm_types::Order;
use mm_types::Position;
use mm_types::Settings;

use crate::commands::CommandRegistry;
use crate::format;
use crate::platform::MessagePlatform;
use crate::platform::TextMode;
use crate::service::NotificationService;

/// Read-only view of trading engine state backing `/status`, `/position` and `/orders`
pub trait EngineView: Send + Sync {
    fn position(&self) -> Option<Position>;

    fn active_orders(&self) -> Vec<Order>;

    fn is_running(&self) -> bool;

    fn active_order_count(&self) -> usize {
        self.active_orders().len()
    }
}

/// `/start` and `/help`, registered only once the service is enabled
pub(crate) fn register_builtin<P: MessagePlatform>(commands: &mut CommandRegistry<NotificationService<P>>) {
    commands.register("start", |service: Arc<NotificationService<P>>, _message| async move {
        service.send_message(format::START_MESSAGE, TextMode::Html).await;
    });

    commands.register("help", |service: Arc<NotificationService<P>>, _message| async move {
        service.send_message(format::HELP_MESSAGE, TextMode::Html).await;
    });
}

impl<P: MessagePlatform> NotificationService<P> {
    /// Register the engine-backed commands advertised by the help menu
    pub fn register_engine_commands(&mut self, settings: Arc<Settings>, engine: Arc<dyn EngineView>) {
        let view = engine.clone();
        self.register_command("status", move |service, _message| {
            let settings = settings.clone();
            let view = view.clone();
            async move {
                let position = view.position();
                service.send_status(&settings, position.as_ref(), view.active_order_count(), view.is_running()).await;
            }
        });

        let view = engine.clone();
        self.register_command("position", move |service, _message| {
            let view = view.clone();
            async move {
                let position = view.position();
                service.send_position_update(position.as_ref()).await;
            }
        });

        self.register_command("orders", move |service, _message| {
            let view = engine.clone();
            async move {
                let orders = view.active_orders();
                service.send_active_orders(&orders).await;
            }
        });
    }
}
