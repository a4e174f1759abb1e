// Single source of truth for all default values.

// --- Working tier ---
pub const WORKING_CAPACITY: usize = 16;
pub const WORKING_EVICTION_THRESHOLD: f64 = 0.1;
pub const WORKING_WEIGHT_CEILING: f64 = 1.5;
pub const WORKING_TOUCH_BOOST: f64 = 0.2;
pub const WORKING_DECAY_LAMBDA: f64 = 0.7; // per hour, half-life ~1h

// --- Episodic tier ---
pub const EPISODIC_CAPACITY: usize = 512;
pub const EPISODIC_EVICTION_THRESHOLD: f64 = 0.05;
pub const EPISODIC_WEIGHT_CEILING: f64 = 2.0;
pub const EPISODIC_TOUCH_BOOST: f64 = 0.15;
pub const EPISODIC_DECAY_STRENGTH: f64 = 72.0; // hours
pub const EPISODIC_DECAY_BETA: f64 = 0.5;

// --- Semantic tier ---
pub const SEMANTIC_CAPACITY: usize = 2_048;
pub const SEMANTIC_EVICTION_THRESHOLD: f64 = 0.02;
pub const SEMANTIC_WEIGHT_CEILING: f64 = 3.0;
pub const SEMANTIC_TOUCH_BOOST: f64 = 0.1;
pub const SEMANTIC_DECAY_ALPHA: f64 = 0.08;

// --- Procedural tier ---
pub const PROCEDURAL_CAPACITY: usize = 256;
pub const PROCEDURAL_EVICTION_THRESHOLD: f64 = 0.02;
pub const PROCEDURAL_WEIGHT_CEILING: f64 = 3.0;
pub const PROCEDURAL_TOUCH_BOOST: f64 = 0.1;
pub const PROCEDURAL_DECAY_STRENGTH: f64 = 2_160.0; // hours (~90 days)
pub const PROCEDURAL_DECAY_BETA: f64 = 1.0;

// --- Emotional tier ---
pub const EMOTIONAL_CAPACITY: usize = 256;
pub const EMOTIONAL_EVICTION_THRESHOLD: f64 = 0.05;
pub const EMOTIONAL_WEIGHT_CEILING: f64 = 2.0;
pub const EMOTIONAL_TOUCH_BOOST: f64 = 0.1;
pub const EMOTIONAL_DECAY_ALPHA: f64 = 0.35;

// --- Shared tier policy ---
pub const DEFAULT_INITIAL_WEIGHT: f64 = 1.0;
pub const DEFAULT_MIN_RELEVANCE: f64 = 0.1;
pub const DEFAULT_PROTECT_MINIMUM: bool = false;

// --- Decay scheduler ---
pub const DEFAULT_DECAY_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_TICK_BEFORE_RETRIEVAL: bool = true;

// --- Association ---
pub const DEFAULT_ASSOCIATION_THRESHOLD: f64 = 0.5;
pub const DEFAULT_EMA_ALPHA: f64 = 0.3;
pub const DEFAULT_EXPANSION_MIN_STRENGTH: f64 = 0.5;
pub const DEFAULT_MAX_LINK_CANDIDATES: usize = 256;
pub const DEFAULT_TEMPORAL_WINDOW_SECS: u64 = 1_800;

// --- Fusion ---
pub const DEFAULT_FUSION_WINDOW: usize = 8;
pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 1.0 / 3.0;
pub const DEFAULT_SALIENCE_WEIGHT: f64 = 1.0 / 3.0;
pub const DEFAULT_ASSOCIATION_WEIGHT: f64 = 1.0 / 3.0;
pub const DEFAULT_SPARSE_PENALTY: f64 = 0.6;

// --- Retrieval ---
pub const DEFAULT_TOP_K_PER_TIER: usize = 5;
pub const DEFAULT_PARALLEL_RETRIEVAL: bool = true;

// --- Promotion ---
pub const DEFAULT_PROMOTION_ENABLED: bool = true;
pub const DEFAULT_WORKING_ACCESS_THRESHOLD: u64 = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
