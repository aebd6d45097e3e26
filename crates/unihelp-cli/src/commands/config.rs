use crate::output::OutputWriter;
use anyhow::Result;
use unihelp_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let map = config.to_inspection_map();

    if output.is_json() {
        let json: serde_json::Value = map
            .iter()
            .map(|(key, (value, source))| {
                (
                    key.clone(),
                    serde_json::json!({ "value": value, "source": format!("{:?}", source) }),
                )
            })
            .collect::<serde_json::Map<String, serde_json::Value>>()
            .into();
        output.result(&json)?;
        return Ok(());
    }

    output.section("Effective configuration");
    let mut keys: Vec<_> = map.keys().collect();
    keys.sort();
    for key in keys {
        let (value, source) = &map[key];
        output.kv(key, format!("{} (from {:?})", value, source));
    }
    Ok(())
}
