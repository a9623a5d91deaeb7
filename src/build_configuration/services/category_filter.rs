use super::rule_primitives::{exceeds, form_factor_conflict, is_air_cooler, ram_conflict, socket_conflict};
use crate::build_configuration::domain::{
    BuildCategory, Catalog, Component, ComponentLookup, PeripheralCategory, Selection,
};

/// CategoryFilter service for narrowing a build slot's candidates
///
/// Each pairwise rule is checked in both directions. The forward and reverse checks
/// live in separate functions because the two sides read different field shapes
/// (a RAM candidate asks whether its type appears in the selected board's support
/// list, a board candidate asks whether its support list covers the selected RAM).
pub struct CategoryFilter;

/// A candidate check against the component selected in another slot
type DirectionalCheck = fn(candidate: &Component, selected: &Component) -> bool;

impl CategoryFilter {
    /// Components in `target` that pass every applicable check against the selection
    ///
    /// An empty selection returns the full slice. Selected ids that do not resolve are
    /// treated as unselected. Catalog order is preserved.
    pub fn eligible<'a>(
        catalog: &'a Catalog,
        target: BuildCategory,
        selection: &Selection,
    ) -> Vec<&'a Component> {
        let candidates = catalog.components(target);
        if selection.is_empty() {
            return candidates.iter().collect();
        }

        // Resolve the other side of each applicable rule once, not per candidate
        let active: Vec<(DirectionalCheck, &Component)> = Self::checks_for(target)
            .iter()
            .filter_map(|(other, check)| {
                let id = selection.get(*other)?;
                catalog.lookup(*other, id).map(|selected| (*check, selected))
            })
            .collect();

        candidates
            .iter()
            .filter(|candidate| active.iter().all(|(check, selected)| check(candidate, selected)))
            .collect()
    }

    /// Peripherals carry no compatibility rules: every catalog entry is eligible
    pub fn eligible_peripherals(catalog: &Catalog, target: PeripheralCategory) -> Vec<&Component> {
        catalog.peripherals(target).iter().collect()
    }

    fn checks_for(target: BuildCategory) -> &'static [(BuildCategory, DirectionalCheck)] {
        match target {
            BuildCategory::Cpu => CPU_CHECKS,
            BuildCategory::Motherboard => MOTHERBOARD_CHECKS,
            BuildCategory::Ram => RAM_CHECKS,
            BuildCategory::Case => CASE_CHECKS,
            BuildCategory::Gpu => GPU_CHECKS,
            BuildCategory::Cooling => COOLING_CHECKS,
            BuildCategory::Psu => PSU_CHECKS,
            BuildCategory::Storage | BuildCategory::CaseFans => &[],
        }
    }
}

const CPU_CHECKS: &[(BuildCategory, DirectionalCheck)] =
    &[(BuildCategory::Motherboard, cpu_fits_motherboard)];

const MOTHERBOARD_CHECKS: &[(BuildCategory, DirectionalCheck)] = &[
    (BuildCategory::Cpu, motherboard_fits_cpu),
    (BuildCategory::Ram, motherboard_fits_ram),
    (BuildCategory::Case, motherboard_fits_case),
];

const RAM_CHECKS: &[(BuildCategory, DirectionalCheck)] =
    &[(BuildCategory::Motherboard, ram_fits_motherboard)];

const CASE_CHECKS: &[(BuildCategory, DirectionalCheck)] = &[
    (BuildCategory::Motherboard, case_fits_motherboard),
    (BuildCategory::Gpu, case_fits_gpu),
    (BuildCategory::Cooling, case_fits_cooling),
    (BuildCategory::Psu, case_fits_psu),
];

const GPU_CHECKS: &[(BuildCategory, DirectionalCheck)] = &[(BuildCategory::Case, gpu_fits_case)];

const COOLING_CHECKS: &[(BuildCategory, DirectionalCheck)] =
    &[(BuildCategory::Case, cooling_fits_case)];

const PSU_CHECKS: &[(BuildCategory, DirectionalCheck)] = &[(BuildCategory::Case, psu_fits_case)];

// socket

fn cpu_fits_motherboard(cpu: &Component, board: &Component) -> bool {
    let cpu_socket = cpu.as_cpu().and_then(|c| c.socket.as_deref());
    let board_socket = board.as_motherboard().and_then(|b| b.socket.as_deref());
    !socket_conflict(cpu_socket, board_socket)
}

fn motherboard_fits_cpu(board: &Component, cpu: &Component) -> bool {
    let board_socket = board.as_motherboard().and_then(|b| b.socket.as_deref());
    let cpu_socket = cpu.as_cpu().and_then(|c| c.socket.as_deref());
    !socket_conflict(board_socket, cpu_socket)
}

// memory type

fn ram_fits_motherboard(ram: &Component, board: &Component) -> bool {
    let (Some(ram), Some(board)) = (ram.as_ram(), board.as_motherboard()) else {
        return true;
    };
    !ram_conflict(&ram.ram_types, &board.ram_support)
}

fn motherboard_fits_ram(board: &Component, ram: &Component) -> bool {
    let (Some(board), Some(ram)) = (board.as_motherboard(), ram.as_ram()) else {
        return true;
    };
    !ram_conflict(&ram.ram_types, &board.ram_support)
}

// form factor

fn case_fits_motherboard(case: &Component, board: &Component) -> bool {
    let Some(case) = case.as_case() else {
        return true;
    };
    let form_factor = board.as_motherboard().and_then(|b| b.form_factor.as_deref());
    !form_factor_conflict(&case.supported_form_factors, form_factor)
}

fn motherboard_fits_case(board: &Component, case: &Component) -> bool {
    let form_factor = board.as_motherboard().and_then(|b| b.form_factor.as_deref());
    let Some(case) = case.as_case() else {
        return true;
    };
    !form_factor_conflict(&case.supported_form_factors, form_factor)
}

// GPU clearance

fn case_fits_gpu(case: &Component, gpu: &Component) -> bool {
    let limit = case.as_case().and_then(|c| c.max_gpu_length);
    let length = gpu.as_gpu().and_then(|g| g.length);
    !exceeds(length, limit)
}

fn gpu_fits_case(gpu: &Component, case: &Component) -> bool {
    let length = gpu.as_gpu().and_then(|g| g.length);
    let limit = case.as_case().and_then(|c| c.max_gpu_length);
    !exceeds(length, limit)
}

// cooler height, air coolers only

fn case_fits_cooling(case: &Component, cooler: &Component) -> bool {
    let Some(cooling) = cooler.as_cooling() else {
        return true;
    };
    if !is_air_cooler(cooling.cooler_type.as_deref()) {
        return true;
    }
    let limit = case.as_case().and_then(|c| c.max_cpu_cooler_height);
    !exceeds(cooling.height, limit)
}

fn cooling_fits_case(cooler: &Component, case: &Component) -> bool {
    let Some(cooling) = cooler.as_cooling() else {
        return true;
    };
    if !is_air_cooler(cooling.cooler_type.as_deref()) {
        return true;
    }
    let limit = case.as_case().and_then(|c| c.max_cpu_cooler_height);
    !exceeds(cooling.height, limit)
}

// PSU length

fn case_fits_psu(case: &Component, psu: &Component) -> bool {
    let limit = case.as_case().and_then(|c| c.max_psu_length);
    let length = psu.as_psu().and_then(|p| p.length);
    !exceeds(length, limit)
}

fn psu_fits_case(psu: &Component, case: &Component) -> bool {
    let length = psu.as_psu().and_then(|p| p.length);
    let limit = case.as_case().and_then(|c| c.max_psu_length);
    !exceeds(length, limit)
}
