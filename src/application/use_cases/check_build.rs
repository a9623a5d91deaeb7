use crate::application::dto::{
    Candidate, CheckBuildRequest, CheckBuildResponse, EligibleCandidates, LineItem,
};
use crate::build_configuration::domain::{
    Catalog, Component, PeripheralSelection, Selection, VariantSelection,
};
use crate::build_configuration::services::{
    BuildTotalCalculator, CategoryFilter, CompatibilityEvaluator, IssueReporter, ReportGenerator,
    VariantResolver,
};
use crate::ports::outbound::{BuildReader, CatalogReader, ProgressReporter, VariantSelectionStore};
use crate::shared::Result;

/// CheckBuildUseCase - Core use case for checking a saved build
///
/// Loads the catalog and the build, then runs the engine: compatibility
/// evaluation, severity grouping, variant-aware pricing and eligibility lists.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `BR` - BuildReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CheckBuildUseCase<CR, BR, PR> {
    catalog_reader: CR,
    build_reader: BR,
    progress_reporter: PR,
}

impl<CR, BR, PR> CheckBuildUseCase<CR, BR, PR>
where
    CR: CatalogReader,
    BR: BuildReader,
    PR: ProgressReporter,
{
    /// Creates a new CheckBuildUseCase with injected dependencies
    pub fn new(catalog_reader: CR, build_reader: BR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            build_reader,
            progress_reporter,
        }
    }

    /// Executes the build check
    ///
    /// # Errors
    /// Returns an error if the catalog or build file cannot be loaded. Compatibility
    /// problems are part of the response, not errors.
    pub fn execute(&self, request: CheckBuildRequest) -> Result<CheckBuildResponse> {
        // Step 1: Load catalog
        self.progress_reporter.report(&format!(
            "📖 Loading catalog from: {}",
            request.catalog_path.display()
        ));
        let loaded = self.catalog_reader.read_catalog(&request.catalog_path)?;
        for warning in &loaded.warnings {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: {}", warning));
        }
        let catalog = loaded.catalog;
        self.progress_reporter
            .report(&format!("✅ Loaded {} component(s)", catalog.len()));

        // Step 2: Load build
        self.progress_reporter.report(&format!(
            "📖 Loading build from: {}",
            request.build_path.display()
        ));
        let build = self.build_reader.read_build(&request.build_path)?;

        let dangling_selections =
            Self::find_dangling(&catalog, &build.selection, &build.peripherals);
        for dangling in &dangling_selections {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Selected component '{}' is not in the catalog; treating it as unselected",
                dangling
            ));
        }

        // Step 3: Evaluate compatibility
        self.progress_reporter
            .report("🔍 Checking compatibility...");
        let issues = IssueReporter::report(CompatibilityEvaluator::evaluate(
            &build.selection,
            &catalog,
        ));

        // Step 4: Price the build
        let resolver = request
            .placeholder_images
            .map(VariantResolver::new)
            .unwrap_or_default();
        let line_items = Self::line_items(
            &catalog,
            &build.selection,
            &build.peripherals,
            &build.variants,
            &resolver,
        );
        let total = BuildTotalCalculator::total(
            &build.selection,
            &build.peripherals,
            &catalog,
            &build.variants,
        );

        // Step 5: Eligible candidates for requested slots
        let eligible = request
            .eligible_categories
            .iter()
            .map(|&category| EligibleCandidates {
                category,
                candidates: CategoryFilter::eligible(&catalog, category, &build.selection)
                    .into_iter()
                    .map(Self::candidate)
                    .collect(),
            })
            .collect();

        self.progress_reporter.report_completion(&format!(
            "✅ Build check complete: {} critical issue(s), {} warning(s)",
            issues.critical.len(),
            issues.warning.len()
        ));

        Ok(CheckBuildResponse {
            issues,
            line_items,
            total,
            eligible,
            dangling_selections,
            metadata: ReportGenerator::generate_default_metadata(),
        })
    }

    fn find_dangling(
        catalog: &Catalog,
        selection: &Selection,
        peripherals: &PeripheralSelection,
    ) -> Vec<String> {
        let slots = selection
            .iter()
            .filter(|(category, id)| catalog.find(*category, id).is_none())
            .map(|(category, id)| format!("{}:{}", category.key(), id));

        let accessories = peripherals.iter().flat_map(|(category, ids)| {
            ids.iter()
                .filter(move |id| catalog.find_peripheral(category, id).is_none())
                .map(move |id| format!("{}:{}", category.key(), id))
        });

        slots.chain(accessories).collect()
    }

    fn line_items<S: VariantSelectionStore>(
        catalog: &Catalog,
        selection: &Selection,
        peripherals: &PeripheralSelection,
        variant_store: &S,
        resolver: &VariantResolver,
    ) -> Vec<LineItem> {
        let build = selection
            .iter()
            .filter_map(|(category, id)| catalog.find(category, id))
            .map(|component| {
                let variant = variant_store.get(component.id());
                Self::line_item(component, variant, resolver, true)
            });

        // Peripherals are always priced at base
        let accessories = peripherals
            .iter()
            .flat_map(|(category, ids)| {
                ids.iter()
                    .filter_map(move |id| catalog.find_peripheral(category, id))
            })
            .map(|component| {
                Self::line_item(component, VariantSelection::new(), resolver, false)
            });

        build.chain(accessories).collect()
    }

    fn line_item(
        component: &Component,
        variant: VariantSelection,
        resolver: &VariantResolver,
        with_options: bool,
    ) -> LineItem {
        let resolved = resolver.resolve(component, &variant);
        let (options, has_multiple_prices, lowest_price) = if with_options {
            (
                VariantResolver::detect_options(component),
                VariantResolver::has_multiple_prices(component),
                VariantResolver::lowest_price(component),
            )
        } else {
            (Vec::new(), false, component.price())
        };

        LineItem {
            category: component.category(),
            component_id: component.id().to_string(),
            name: component.display_name().to_string(),
            variant,
            resolved,
            options,
            has_multiple_prices,
            lowest_price,
        }
    }

    fn candidate(component: &Component) -> Candidate {
        Candidate {
            component_id: component.id().to_string(),
            name: component.display_name().to_string(),
            price: component.price(),
            has_multiple_prices: VariantResolver::has_multiple_prices(component),
            lowest_price: VariantResolver::lowest_price(component),
        }
    }
}
