/// Background listener actor.
///
/// Subscribes to the message channel when started and logs every message it
/// receives. When the subscription cannot be established or ends, it
/// resubscribes after an exponential backoff. It runs until it receives
/// [`Shutdown`].
use actix::prelude::*;
use log::{error, info, warn};
use std::time::Duration;

use super::backoff::Backoff;
use super::messages::{GetStatus, ListenerStatus, Shutdown};
use crate::config::broker::{RESUBSCRIBE_BASE_DELAY_MS, RESUBSCRIBE_MAX_DELAY_MS};
use crate::message::Message as ChannelMessage;
use crate::service::MessageService;

pub struct MessageListener {
    service: MessageService,
    backoff: Backoff,
    subscribed: bool,
    received: u64,
    restarts: u64,
    last_received: Option<ChannelMessage>,
}

impl MessageListener {
    pub fn new(service: MessageService) -> Self {
        Self {
            service,
            backoff: Backoff::new(
                Duration::from_millis(RESUBSCRIBE_BASE_DELAY_MS),
                Duration::from_millis(RESUBSCRIBE_MAX_DELAY_MS),
            ),
            subscribed: false,
            received: 0,
            restarts: 0,
            last_received: None,
        }
    }

    pub fn with_backoff(mut self, base: Duration, max: Duration) -> Self {
        self.backoff = Backoff::new(base, max);
        self
    }

    fn status(&self) -> ListenerStatus {
        ListenerStatus {
            subscribed: self.subscribed,
            received: self.received,
            restarts: self.restarts,
            last_received: self.last_received.clone(),
        }
    }

    /// Open a subscription and attach it to this actor's context.
    fn subscribe(&mut self, ctx: &mut Context<Self>) {
        let service = self.service.clone();
        let fut = async move { service.subscribe().await }
            .into_actor(self)
            .map(|result, act, ctx| match result {
                Ok(stream) => {
                    info!("[Listener] Listening on {}", act.service.channel());
                    act.subscribed = true;
                    act.backoff.reset();
                    ctx.add_stream(stream);
                }
                Err(e) => {
                    error!(
                        "[Listener] Failed to subscribe to {}: {}",
                        act.service.channel(),
                        e
                    );
                    act.schedule_resubscribe(ctx);
                }
            });
        ctx.spawn(fut);
    }

    fn schedule_resubscribe(&mut self, ctx: &mut Context<Self>) {
        self.restarts += 1;
        let delay = self.backoff.next_delay();
        warn!(
            "[Listener] Resubscribing in {:?} (restart #{})",
            delay, self.restarts
        );
        ctx.run_later(delay, |act, ctx| act.subscribe(ctx));
    }
}

impl Actor for MessageListener {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.subscribe(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        info!(
            "[Listener] Stopped after {} messages ({} restarts)",
            self.received, self.restarts
        );
    }
}

impl StreamHandler<ChannelMessage> for MessageListener {
    fn handle(&mut self, msg: ChannelMessage, _ctx: &mut Self::Context) {
        self.received += 1;
        info!("Received: {}", msg);
        self.last_received = Some(msg);
    }

    /// The subscription ended: the broker connection was lost.
    fn finished(&mut self, ctx: &mut Self::Context) {
        self.subscribed = false;
        error!(
            "[Listener] Subscription to {} ended",
            self.service.channel()
        );
        self.schedule_resubscribe(ctx);
    }
}

impl Handler<Shutdown> for MessageListener {
    type Result = ();

    fn handle(&mut self, _msg: Shutdown, ctx: &mut Context<Self>) {
        info!("[Listener] Shutdown requested");
        self.subscribed = false;
        ctx.stop();
    }
}

impl Handler<GetStatus> for MessageListener {
    type Result = MessageResult<GetStatus>;

    fn handle(&mut self, _msg: GetStatus, _ctx: &mut Context<Self>) -> Self::Result {
        MessageResult(self.status())
    }
}
