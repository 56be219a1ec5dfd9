//! Adapter traits
//!
//! [`ResourceAdapter`] and [`DataSourceAdapter`] are the typed contracts each
//! resource kind implements. [`DynamicResource`] and [`DynamicDataSource`]
//! erase the state type to JSON so adapters of every kind can sit in one
//! registry.

use super::diagnostics::{Diagnostic, Operation};
use crate::api::ApiError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{0} does not support in-place updates")]
    UpdateUnsupported(&'static str),

    #[error("invalid {kind} state: {source}")]
    InvalidState {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid import id {id:?} for {kind}")]
    InvalidImportId { kind: &'static str, id: String },

    #[error("could not parse {field} value {value:?} as a boolean")]
    InvalidFlag { field: &'static str, value: String },
}

pub type Result<T, E = AdapterError> = std::result::Result<T, E>;

/// CRUD contract for one managed resource kind.
///
/// Create runs in two phases: [`submit`](Self::submit) issues the create
/// call, [`settle`](Self::settle) performs any follow-up read and merges the
/// reply into the planned state. Each phase can be driven on its own.
#[async_trait]
pub trait ResourceAdapter: Send + Sync {
    /// Full type name, e.g. `utho_firewall`
    const TYPE_NAME: &'static str;
    /// Human name used in diagnostics
    const KIND: &'static str;

    type State: Serialize + DeserializeOwned + Default + Send + Sync + 'static;
    /// Partial reply of the create call
    type Created: Send;

    /// Fill plan-time defaults before anything is sent
    fn modify_plan(&self, _plan: &mut Self::State) {}

    async fn submit(&self, plan: &Self::State) -> Result<Self::Created>;

    async fn settle(&self, plan: Self::State, created: Self::Created) -> Result<Self::State>;

    async fn create(&self, mut plan: Self::State) -> Result<Self::State> {
        self.modify_plan(&mut plan);
        let created = self.submit(&plan).await?;
        self.settle(plan, created).await
    }

    /// Refresh from the API; fields the API never echoes come from `prior`.
    async fn read(&self, prior: Self::State) -> Result<Self::State>;

    async fn update(&self, _plan: Self::State, _prior: Self::State) -> Result<Self::State> {
        Err(AdapterError::UpdateUnsupported(Self::TYPE_NAME))
    }

    async fn delete(&self, state: &Self::State) -> Result<()>;

    /// Build the skeleton state an import id stands for. The host reads it
    /// afterwards.
    fn import_state(&self, id: &str) -> Result<Self::State>;
}

/// Read-only lookup
#[async_trait]
pub trait DataSourceAdapter: Send + Sync {
    const TYPE_NAME: &'static str;
    const KIND: &'static str;

    type State: Serialize + Send + 'static;

    async fn read(&self) -> Result<Self::State>;
}

/// Object-safe, JSON-typed view of a [`ResourceAdapter`].
#[async_trait]
pub trait DynamicResource: Send + Sync {
    fn type_name(&self) -> &'static str;
    async fn create(&self, plan: Value) -> Result<Value, Diagnostic>;
    async fn read(&self, state: Value) -> Result<Value, Diagnostic>;
    async fn update(&self, plan: Value, prior: Value) -> Result<Value, Diagnostic>;
    async fn delete(&self, state: Value) -> Result<(), Diagnostic>;
    /// Import an existing object by id and read it
    async fn import(&self, id: &str) -> Result<Value, Diagnostic>;
}

/// Object-safe, JSON-typed view of a [`DataSourceAdapter`].
#[async_trait]
pub trait DynamicDataSource: Send + Sync {
    fn type_name(&self) -> &'static str;
    async fn read(&self) -> Result<Value, Diagnostic>;
}

fn from_json<T: DeserializeOwned>(kind: &'static str, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|source| AdapterError::InvalidState { kind, source })
}

fn to_json<T: Serialize>(kind: &'static str, state: &T) -> Result<Value> {
    serde_json::to_value(state).map_err(|source| AdapterError::InvalidState { kind, source })
}

fn report<A: ResourceAdapter>(op: Operation, err: AdapterError) -> Diagnostic {
    tracing::error!("{} {} failed: {}", op, A::TYPE_NAME, err);
    Diagnostic::operation_failed(op, A::KIND, &err)
}

#[async_trait]
impl<A: ResourceAdapter> DynamicResource for A {
    fn type_name(&self) -> &'static str {
        A::TYPE_NAME
    }

    async fn create(&self, plan: Value) -> Result<Value, Diagnostic> {
        let run = async {
            let plan: A::State = from_json(A::KIND, plan)?;
            let state = ResourceAdapter::create(self, plan).await?;
            to_json(A::KIND, &state)
        };
        run.await.map_err(|e| report::<A>(Operation::Create, e))
    }

    async fn read(&self, state: Value) -> Result<Value, Diagnostic> {
        let run = async {
            let prior: A::State = from_json(A::KIND, state)?;
            let state = ResourceAdapter::read(self, prior).await?;
            to_json(A::KIND, &state)
        };
        run.await.map_err(|e| report::<A>(Operation::Read, e))
    }

    async fn update(&self, plan: Value, prior: Value) -> Result<Value, Diagnostic> {
        let run = async {
            let plan: A::State = from_json(A::KIND, plan)?;
            let prior: A::State = from_json(A::KIND, prior)?;
            let state = ResourceAdapter::update(self, plan, prior).await?;
            to_json(A::KIND, &state)
        };
        run.await.map_err(|e| report::<A>(Operation::Update, e))
    }

    async fn delete(&self, state: Value) -> Result<(), Diagnostic> {
        let run = async {
            let state: A::State = from_json(A::KIND, state)?;
            ResourceAdapter::delete(self, &state).await
        };
        run.await.map_err(|e| report::<A>(Operation::Delete, e))
    }

    async fn import(&self, id: &str) -> Result<Value, Diagnostic> {
        let run = async {
            let skeleton = self.import_state(id)?;
            let state = ResourceAdapter::read(self, skeleton).await?;
            to_json(A::KIND, &state)
        };
        run.await.map_err(|e| report::<A>(Operation::Import, e))
    }
}

#[async_trait]
impl<D: DataSourceAdapter> DynamicDataSource for D {
    fn type_name(&self) -> &'static str {
        D::TYPE_NAME
    }

    async fn read(&self) -> Result<Value, Diagnostic> {
        let run = async {
            let state = DataSourceAdapter::read(self).await?;
            to_json(D::KIND, &state)
        };
        run.await.map_err(|err| {
            tracing::error!("read {} failed: {}", D::TYPE_NAME, err);
            Diagnostic::operation_failed(Operation::Read, D::KIND, &err)
        })
    }
}

/// Parse the API's boolean-ish strings: `1/0`, `t/f`, `true/false` in any
/// case.
pub fn parse_flag(field: &'static str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(AdapterError::InvalidFlag {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::sync::Mutex;

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Widget {
        id: String,
        name: String,
        size: String,
    }

    /// In-memory adapter recording the phases it ran
    #[derive(Default)]
    struct FakeWidgets {
        calls: Mutex<Vec<&'static str>>,
    }

    impl FakeWidgets {
        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl ResourceAdapter for FakeWidgets {
        const TYPE_NAME: &'static str = "utho_widget";
        const KIND: &'static str = "widget";
        type State = Widget;
        type Created = String;

        fn modify_plan(&self, plan: &mut Widget) {
            if plan.size.is_empty() {
                plan.size = "small".to_string();
            }
        }

        async fn submit(&self, plan: &Widget) -> Result<String> {
            self.record("submit");
            if plan.name == "broken" {
                return Err(ApiError::api("name rejected").into());
            }
            Ok("42".to_string())
        }

        async fn settle(&self, mut plan: Widget, created: String) -> Result<Widget> {
            self.record("settle");
            plan.id = created;
            Ok(plan)
        }

        async fn read(&self, prior: Widget) -> Result<Widget> {
            self.record("read");
            if prior.id.is_empty() {
                return Err(ApiError::NotFound("widget").into());
            }
            Ok(prior)
        }

        async fn delete(&self, _state: &Widget) -> Result<()> {
            self.record("delete");
            Ok(())
        }

        fn import_state(&self, id: &str) -> Result<Widget> {
            Ok(Widget {
                id: id.to_string(),
                ..Widget::default()
            })
        }
    }

    #[tokio::test]
    async fn test_create_runs_plan_submit_settle() {
        let widgets = FakeWidgets::default();
        let state = ResourceAdapter::create(
            &widgets,
            Widget {
                name: "w".into(),
                ..Widget::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(state.id, "42");
        assert_eq!(state.size, "small");
        assert_eq!(*widgets.calls.lock().unwrap(), vec!["submit", "settle"]);
    }

    #[tokio::test]
    async fn test_submit_failure_skips_settle() {
        let widgets = FakeWidgets::default();
        let err = ResourceAdapter::create(
            &widgets,
            Widget {
                name: "broken".into(),
                ..Widget::default()
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "name rejected");
        assert_eq!(*widgets.calls.lock().unwrap(), vec!["submit"]);
    }

    #[tokio::test]
    async fn test_update_unsupported_by_default() {
        let widgets = FakeWidgets::default();
        let err = ResourceAdapter::update(&widgets, Widget::default(), Widget::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AdapterError::UpdateUnsupported("utho_widget")));
    }

    #[tokio::test]
    async fn test_dynamic_create_roundtrips_json() {
        let widgets: Box<dyn DynamicResource> = Box::new(FakeWidgets::default());
        let state = widgets
            .create(serde_json::json!({ "name": "w", "size": "large" }))
            .await
            .unwrap();
        assert_eq!(state["id"], "42");
        assert_eq!(state["size"], "large");
        assert_eq!(widgets.type_name(), "utho_widget");
    }

    #[tokio::test]
    async fn test_dynamic_errors_become_diagnostics() {
        let widgets: Box<dyn DynamicResource> = Box::new(FakeWidgets::default());

        let diag = widgets
            .create(serde_json::json!({ "name": "broken" }))
            .await
            .unwrap_err();
        assert_eq!(diag.summary, "Error creating widget");
        assert!(diag.detail.ends_with("name rejected"));

        let diag = widgets.read(serde_json::json!({})).await.unwrap_err();
        assert_eq!(diag.summary, "Error reading widget");
        assert!(diag.detail.ends_with("widget not found"));
    }

    #[tokio::test]
    async fn test_dynamic_rejects_malformed_state() {
        let widgets: Box<dyn DynamicResource> = Box::new(FakeWidgets::default());
        let diag = widgets
            .read(serde_json::json!({ "id": 7 }))
            .await
            .unwrap_err();
        assert!(diag.detail.contains("invalid widget state"));
    }

    #[tokio::test]
    async fn test_dynamic_import_reads_skeleton() {
        let widgets = FakeWidgets::default();
        let state = DynamicResource::import(&widgets, "9").await.unwrap();
        assert_eq!(state["id"], "9");
        assert_eq!(*widgets.calls.lock().unwrap(), vec!["read"]);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("f", "1").unwrap());
        assert!(parse_flag("f", "TRUE").unwrap());
        assert!(parse_flag("f", "t").unwrap());
        assert!(!parse_flag("f", "0").unwrap());
        assert!(!parse_flag("f", "False").unwrap());
        let err = parse_flag("public_ip_enabled", "").unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not parse public_ip_enabled value \"\" as a boolean"
        );
    }
}
