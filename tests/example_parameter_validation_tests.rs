#[cfg(test)]
mod tests {
    use glob::glob;
    use julia_series::{
        cli::gradient_swatch::GradientSwatchParams, fractals::julia_series::JuliaSeriesParams,
    };
    use serde::de::DeserializeOwned;
    use std::any::type_name;
    use std::fs;

    /// Parses every `params.json` below `directory`, returning how many were found.
    fn parse_all_parameter_files_or_panic<T: DeserializeOwned>(directory: &str) -> usize {
        let pattern = format!("{}/**/params.json", directory);
        let mut count = 0;

        for entry in glob(&pattern).expect("Failed to read glob pattern") {
            let path = entry.unwrap_or_else(|e| panic!("Failed to read path: {:?}", e));
            let content = fs::read_to_string(&path)
                .unwrap_or_else(|_| panic!("Failed to read file: {:?}", path));

            if let Err(err) = serde_json::from_str::<T>(&content) {
                panic!(
                    "Failed to parse JSON file: {:?} as parameter type: `{}`.\n\n{:?}\n",
                    path,
                    type_name::<T>(),
                    err
                );
            }
            count += 1;
        }
        count
    }

    #[test]
    fn test_ensure_all_demo_files_can_be_parsed() {
        let render_count = parse_all_parameter_files_or_panic::<JuliaSeriesParams>("demos/render-*");
        assert!(render_count >= 2);

        let swatch_count =
            parse_all_parameter_files_or_panic::<GradientSwatchParams>("demos/visualize-*");
        assert!(swatch_count >= 1);
    }
}
