//! Verb and entity dispatch for the tokens that follow the global options.

#![deny(clippy::all, clippy::pedantic)]

use std::fmt;

use kconf_api_types::{
    BalancingAlgorithm, BasicAuthRequest, ConsumerRequest, EntityRef, IpRestrictionConfig,
    JwtAlgorithm, JwtRequest, KeyAuthRequest, PluginRequest, RateLimitingConfig,
    RequestSizeLimitingConfig, RouteRequest, ServiceRequest, SizeUnit, SyslogConfig,
    SyslogLevel, TargetRequest, UpstreamRequest,
};

use crate::client::{CliError, Ctx};
use crate::flags::Flags;
use crate::handlers::{
    consumer_plugins, consumers, credentials, plugins, routes, services, status, targets,
    upstreams,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Status,
    Add,
    Query,
    List,
    Update,
    Delete,
}

impl Verb {
    const ALL: [Self; 6] = [
        Self::Status,
        Self::Add,
        Self::Query,
        Self::List,
        Self::Update,
        Self::Delete,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Add => "add",
            Self::Query => "query",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == token)
    }

    /// Entities accepted after this verb.
    fn entities(self) -> &'static [Entity] {
        use Entity::{
            Consumer, ConsumerBasicAuth, ConsumerIpRestriction, ConsumerJwt, ConsumerKeyAuth,
            ConsumerPlugin, ConsumerRateLimiting, ConsumerRequestSizeLimiting, ConsumerSyslog,
            Plugin, Route, Service, Upstream, UpstreamTarget,
        };
        match self {
            Self::Status => &[],
            Self::Add => &[
                Service,
                Route,
                Consumer,
                ConsumerBasicAuth,
                ConsumerKeyAuth,
                ConsumerJwt,
                ConsumerIpRestriction,
                ConsumerRateLimiting,
                ConsumerRequestSizeLimiting,
                ConsumerSyslog,
                Plugin,
                Upstream,
                UpstreamTarget,
            ],
            Self::Query => &[
                Service,
                Route,
                Consumer,
                ConsumerBasicAuth,
                ConsumerKeyAuth,
                ConsumerJwt,
                Plugin,
                Upstream,
                UpstreamTarget,
            ],
            Self::List => &[
                Service,
                Route,
                Consumer,
                ConsumerPlugin,
                Plugin,
                Upstream,
                UpstreamTarget,
            ],
            Self::Update => &[Service, Route, Consumer, Plugin, Upstream],
            Self::Delete => &[
                Service,
                Route,
                Consumer,
                ConsumerBasicAuth,
                ConsumerKeyAuth,
                ConsumerJwt,
                Plugin,
                Upstream,
                UpstreamTarget,
            ],
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Service,
    Route,
    Consumer,
    ConsumerBasicAuth,
    ConsumerKeyAuth,
    ConsumerJwt,
    ConsumerIpRestriction,
    ConsumerRateLimiting,
    ConsumerRequestSizeLimiting,
    ConsumerSyslog,
    ConsumerPlugin,
    Plugin,
    Upstream,
    UpstreamTarget,
}

impl Entity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Route => "route",
            Self::Consumer => "consumer",
            Self::ConsumerBasicAuth => "consumer-basic-auth",
            Self::ConsumerKeyAuth => "consumer-key-auth",
            Self::ConsumerJwt => "consumer-jwt",
            Self::ConsumerIpRestriction => "consumer-ip-restriction",
            Self::ConsumerRateLimiting => "consumer-rate-limiting",
            Self::ConsumerRequestSizeLimiting => "consumer-request-size-limiting",
            Self::ConsumerSyslog => "consumer-syslog",
            Self::ConsumerPlugin => "consumer-plugin",
            Self::Plugin => "plugin",
            Self::Upstream => "upstream",
            Self::UpstreamTarget => "upstream-target",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs one command line (verb, entity, flags) and returns what to print.
pub async fn run<S: AsRef<str>>(ctx: &Ctx, tokens: &[S]) -> Result<String, CliError> {
    let Some((first, rest)) = tokens.split_first() else {
        return Err(CliError::usage(format!(
            "missing command: available commands: {}",
            join(&Verb::ALL)
        )));
    };
    let verb = Verb::parse(first.as_ref())
        .ok_or_else(|| CliError::usage(format!("invalid command: {}", first.as_ref())))?;
    if verb == Verb::Status {
        return status::check(ctx).await;
    }

    let available = verb.entities();
    let Some((entity, rest)) = rest.split_first() else {
        return Err(CliError::usage(format!(
            "missing entity for command {verb}: available entities: {}",
            join(available)
        )));
    };
    let entity = available
        .iter()
        .copied()
        .find(|e| e.as_str() == entity.as_ref())
        .ok_or_else(|| {
            CliError::usage(format!(
                "invalid entity for command {verb}: {}",
                entity.as_ref()
            ))
        })?;

    let flags = Flags::parse(rest);
    tracing::debug!(%verb, %entity, ?flags, "dispatching command");
    match verb {
        Verb::Status => status::check(ctx).await,
        Verb::Add => add(ctx, entity, &flags).await,
        Verb::Query => query(ctx, entity, &flags).await,
        Verb::List => list(ctx, entity, &flags).await,
        Verb::Update => update(ctx, entity, &flags).await,
        Verb::Delete => delete(ctx, entity, &flags).await,
    }
}

async fn add(ctx: &Ctx, entity: Entity, flags: &Flags) -> Result<String, CliError> {
    match entity {
        Entity::Service => services::add(ctx, &service_request(flags)?).await,
        Entity::Route => routes::add(ctx, &route_request(flags)).await,
        Entity::Consumer => consumers::add(ctx, &consumer_request(flags)).await,
        Entity::ConsumerBasicAuth => {
            let id = flags.required("id", "consumer")?;
            let req = BasicAuthRequest {
                username: flags.string("user-name"),
                password: flags.string("password"),
            };
            credentials::add_basic_auth(ctx, id, &req).await
        }
        Entity::ConsumerKeyAuth => {
            let id = flags.required("id", "consumer")?;
            let req = KeyAuthRequest {
                key: flags.string("key"),
                ttl: flags.integer("ttl")?,
            };
            credentials::add_key_auth(ctx, id, &req).await
        }
        Entity::ConsumerJwt => {
            let id = flags.required("id", "consumer")?;
            let req = JwtRequest {
                algorithm: flags.choice::<JwtAlgorithm>("algorithm")?,
                key: flags.string("key"),
                secret: flags.string("secret"),
            };
            credentials::add_jwt(ctx, id, &req).await
        }
        Entity::ConsumerIpRestriction => {
            let id = flags.required("id", "consumer")?;
            let config = IpRestrictionConfig {
                allow: flags.list("allow"),
                deny: flags.list("deny"),
            };
            consumer_plugins::add(ctx, id, config).await
        }
        Entity::ConsumerRateLimiting => {
            let id = flags.required("id", "consumer")?;
            let config = RateLimitingConfig {
                second: flags.integer("second")?,
                minute: flags.integer("minute")?,
                hour: flags.integer("hour")?,
                error_code: flags.integer("error-code")?,
                error_message: flags.string("error-message"),
            };
            consumer_plugins::add(ctx, id, config).await
        }
        Entity::ConsumerRequestSizeLimiting => {
            let id = flags.required("id", "consumer")?;
            let config = RequestSizeLimitingConfig {
                allowed_payload_size: flags.integer("allowed-payload-size")?,
                size_unit: flags.choice::<SizeUnit>("size-unit")?,
                require_content_length: flags.bool("require-content-length")?,
            };
            consumer_plugins::add(ctx, id, config).await
        }
        Entity::ConsumerSyslog => {
            let id = flags.required("id", "consumer")?;
            let config = SyslogConfig {
                log_level: flags.choice::<SyslogLevel>("log-level")?,
            };
            consumer_plugins::add(ctx, id, config).await
        }
        Entity::Plugin => plugins::add(ctx, &plugin_request(flags, true)?).await,
        Entity::Upstream => upstreams::add(ctx, &upstream_request(flags)?).await,
        Entity::UpstreamTarget => {
            let upstream_id = flags.required("upstream-id", "upstream")?;
            let req = TargetRequest {
                target: flags.string("target"),
                weight: flags.integer("weight")?,
            };
            targets::add(ctx, upstream_id, &req).await
        }
        Entity::ConsumerPlugin => Err(unsupported(Verb::Add, entity)),
    }
}

async fn query(ctx: &Ctx, entity: Entity, flags: &Flags) -> Result<String, CliError> {
    match entity {
        Entity::UpstreamTarget => {
            let upstream_id = flags.required("upstream-id", "upstream")?;
            let id = flags.required("id", "upstream target")?;
            targets::query(ctx, upstream_id, id).await
        }
        Entity::ConsumerBasicAuth => {
            credentials::query_basic_auth(ctx, flags.required("id", "consumer")?).await
        }
        Entity::ConsumerKeyAuth => {
            credentials::query_key_auth(ctx, flags.required("id", "consumer")?).await
        }
        Entity::ConsumerJwt => credentials::query_jwt(ctx, flags.required("id", "consumer")?).await,
        _ => {
            let id = flags.required("id", entity_label(entity))?;
            match entity {
                Entity::Service => services::query(ctx, id).await,
                Entity::Route => routes::query(ctx, id).await,
                Entity::Consumer => consumers::query(ctx, id).await,
                Entity::Plugin => plugins::query(ctx, id).await,
                Entity::Upstream => upstreams::query(ctx, id).await,
                _ => Err(unsupported(Verb::Query, entity)),
            }
        }
    }
}

async fn list(ctx: &Ctx, entity: Entity, flags: &Flags) -> Result<String, CliError> {
    match entity {
        Entity::Service => services::list(ctx).await,
        Entity::Route => routes::list(ctx).await,
        Entity::Consumer => consumers::list(ctx).await,
        Entity::ConsumerPlugin => {
            consumer_plugins::list(ctx, flags.required("id", "consumer")?).await
        }
        Entity::Plugin => plugins::list(ctx).await,
        Entity::Upstream => upstreams::list(ctx).await,
        Entity::UpstreamTarget => {
            targets::list(ctx, flags.required("upstream-id", "upstream")?).await
        }
        _ => Err(unsupported(Verb::List, entity)),
    }
}

async fn update(ctx: &Ctx, entity: Entity, flags: &Flags) -> Result<String, CliError> {
    let id = flags.required("id", entity_label(entity))?;
    match entity {
        Entity::Service => services::update(ctx, id, &service_request(flags)?).await,
        Entity::Route => routes::update(ctx, id, &route_request(flags)).await,
        Entity::Consumer => consumers::update(ctx, id, &consumer_request(flags)).await,
        Entity::Plugin => plugins::update(ctx, id, &plugin_request(flags, false)?).await,
        Entity::Upstream => upstreams::update(ctx, id, &upstream_request(flags)?).await,
        _ => Err(unsupported(Verb::Update, entity)),
    }
}

async fn delete(ctx: &Ctx, entity: Entity, flags: &Flags) -> Result<String, CliError> {
    match entity {
        Entity::ConsumerBasicAuth | Entity::ConsumerKeyAuth | Entity::ConsumerJwt => {
            let consumer_id = flags.required("id", "consumer")?;
            let credential_id = flags.required("plugin-id", "plugin")?;
            match entity {
                Entity::ConsumerBasicAuth => {
                    credentials::delete_basic_auth(ctx, consumer_id, credential_id).await
                }
                Entity::ConsumerKeyAuth => {
                    credentials::delete_key_auth(ctx, consumer_id, credential_id).await
                }
                _ => credentials::delete_jwt(ctx, consumer_id, credential_id).await,
            }
        }
        Entity::UpstreamTarget => {
            let upstream_id = flags.required("upstream-id", "upstream")?;
            let id = flags.required("id", "upstream target")?;
            targets::delete(ctx, upstream_id, id).await
        }
        _ => {
            let id = flags.required("id", entity_label(entity))?;
            match entity {
                Entity::Service => services::delete(ctx, id).await,
                Entity::Route => routes::delete(ctx, id).await,
                Entity::Consumer => consumers::delete(ctx, id).await,
                Entity::Plugin => plugins::delete(ctx, id).await,
                Entity::Upstream => upstreams::delete(ctx, id).await,
                _ => Err(unsupported(Verb::Delete, entity)),
            }
        }
    }
}

fn service_request(flags: &Flags) -> Result<ServiceRequest, CliError> {
    Ok(ServiceRequest {
        name: flags.string("name"),
        url: flags.string("url"),
        enabled: flags.bool("enabled")?,
    })
}

fn route_request(flags: &Flags) -> RouteRequest {
    RouteRequest {
        name: flags.string("name"),
        protocols: flags.list("protocols"),
        methods: flags.list("methods"),
        paths: flags.list("paths"),
        service: EntityRef::from_id(&flags.string("service-id")),
    }
}

fn consumer_request(flags: &Flags) -> ConsumerRequest {
    ConsumerRequest {
        custom_id: flags.string("custom-id"),
        username: flags.string("user-name"),
        tags: flags.list("tags"),
    }
}

/// A plugin's name is fixed at creation, so updates ignore `--name`.
fn plugin_request(flags: &Flags, with_name: bool) -> Result<PluginRequest, CliError> {
    Ok(PluginRequest {
        name: if with_name {
            flags.string("name")
        } else {
            String::new()
        },
        service: EntityRef::from_id(&flags.string("service-id")),
        route: EntityRef::from_id(&flags.string("route-id")),
        enabled: flags.bool("enabled")?,
    })
}

fn upstream_request(flags: &Flags) -> Result<UpstreamRequest, CliError> {
    Ok(UpstreamRequest {
        name: flags.string("name"),
        algorithm: flags.choice::<BalancingAlgorithm>("algorithm")?,
        tags: flags.list("tags"),
    })
}

/// Name used in "missing <entity> id" messages.
fn entity_label(entity: Entity) -> &'static str {
    match entity {
        Entity::Service => "service",
        Entity::Route => "route",
        Entity::Plugin => "plugin",
        Entity::Upstream => "upstream",
        Entity::UpstreamTarget => "upstream target",
        _ => "consumer",
    }
}

fn unsupported(verb: Verb, entity: Entity) -> CliError {
    CliError::usage(format!("invalid entity for command {verb}: {entity}"))
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
