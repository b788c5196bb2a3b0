//! JSON line logger, passed around explicitly rather than installed globally.

use env_logger::{Target, WriteStyle};
use log::{
    kv::{self, Key, ToValue, VisitSource},
    Level, LevelFilter, Log, Record,
};
use serde_json::{Map, Value};
use std::io::{self, Write};

pub type Field<'a> = (&'a str, kv::Value<'a>);

pub struct Logger {
    inner: env_logger::Logger,
    context: Vec<(&'static str, String)>,
}

impl Logger {
    pub fn new(level: LevelFilter, target: Target) -> Self {
        let inner = env_logger::Builder::new()
            .filter_level(level)
            .write_style(WriteStyle::Never)
            .target(target)
            .format(write_json_line)
            .build();

        Self {
            inner,
            context: Vec::new(),
        }
    }

    /// Binds a field that is attached to every entry written afterwards.
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    pub fn error(&self, msg: &str, fields: &[Field<'_>]) {
        self.emit(Level::Error, msg, fields);
    }

    pub fn info(&self, msg: &str, fields: &[Field<'_>]) {
        self.emit(Level::Info, msg, fields);
    }

    pub fn debug(&self, msg: &str, fields: &[Field<'_>]) {
        self.emit(Level::Debug, msg, fields);
    }

    pub fn flush(&self) {
        self.inner.flush();
    }

    fn emit(&self, level: Level, msg: &str, fields: &[Field<'_>]) {
        let mut pairs: Vec<(&str, &dyn ToValue)> = self
            .context
            .iter()
            .map(|(key, value)| (*key, value as &dyn ToValue))
            .collect();
        pairs.extend(fields.iter().map(|(key, value)| (*key, value as &dyn ToValue)));

        self.inner.log(
            &Record::builder()
                .level(level)
                .target(env!("CARGO_PKG_NAME"))
                .args(format_args!("{msg}"))
                .key_values(&pairs)
                .build(),
        );
    }
}

fn write_json_line(buf: &mut env_logger::fmt::Formatter, record: &Record<'_>) -> io::Result<()> {
    let mut entry = Map::new();
    entry.insert(
        "level".into(),
        Value::from(record.level().as_str().to_ascii_lowercase()),
    );
    entry.insert("ts".into(), Value::from(buf.timestamp_millis().to_string()));
    entry.insert("msg".into(), Value::from(record.args().to_string()));

    record
        .key_values()
        .visit(&mut JsonFields(&mut entry))
        .map_err(|e| io::Error::other(e.to_string()))?;

    serde_json::to_writer(&mut *buf, &entry)?;
    writeln!(buf)
}

struct JsonFields<'a>(&'a mut Map<String, Value>);

impl<'kvs> VisitSource<'kvs> for JsonFields<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: kv::Value<'kvs>) -> Result<(), kv::Error> {
        let json = if let Some(n) = value.to_u64() {
            Value::from(n)
        } else if let Some(n) = value.to_i64() {
            Value::from(n)
        } else if let Some(b) = value.to_bool() {
            Value::from(b)
        } else {
            Value::from(value.to_string())
        };

        self.0.insert(key.as_str().to_string(), json);
        Ok(())
    }
}
