// Stat block
pub const NUM_STATS: usize = 9;
pub const BASE_STAT_VALUE: u32 = 5;
pub const STAT_GAIN_PER_LEVEL: u32 = 2;

// Type bonuses
pub const PRIMARY_STAT_BONUS: u32 = 3;
pub const SECONDARY_STAT_BONUS: u32 = 1;

// Derived attributes
pub const BASE_ATTACK_DAMAGE: u32 = 10;
pub const PHYSICAL_ATTACK_PER_STR: f64 = 1.5;
pub const PHYSICAL_DEFENSE_PER_STR: f64 = 0.5;
pub const BASE_ACCURACY: u32 = 75;
pub const SPEED_PER_DEX: f64 = 0.5;
pub const DODGE_PER_AGI: f64 = 0.75;
pub const BASE_ATTACK_SPEED: f64 = 1.0;
pub const ATTACK_SPEED_PER_AGI: f64 = 0.025;
pub const BASE_HEALTH: u32 = 100;
pub const HEALTH_PER_VIT: u32 = 5;
pub const REGEN_PER_VIT: f64 = 0.2;
pub const DEBUFF_RESIST_PER_WIL: f64 = 0.5;
pub const MAGIC_RESIST_PER_WIL: f64 = 0.75;
pub const MAGIC_ATTACK_PER_INT: f64 = 1.5;
pub const PER_PER_CRIT_PERCENT: f64 = 5.0;

// Rarity level offsets (Common, Uncommon, Rare, Elite, Boss)
pub const RARITY_LEVEL_OFFSETS: [u32; 5] = [0, 1, 2, 3, 5];

// Standalone battle reward multipliers (Common, Uncommon, Rare, Elite, Boss)
pub const RARITY_REWARD_MULTIPLIERS: [f64; 5] = [1.0, 1.5, 2.0, 3.0, 5.0];
pub const REWARD_FOOD_PER_ENEMY: f64 = 5.0;
pub const REWARD_MATERIALS_PER_ENEMY: f64 = 3.0;
pub const REWARD_MEDICINE_PER_ENEMY: f64 = 1.0;
pub const REWARD_XP_PER_LEVEL: f64 = 10.0;

// Rarity table validation
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

// Dungeon generation
pub const DUNGEON_ROOM_ENEMIES_MIN: u32 = 2;
pub const DUNGEON_ROOM_ENEMIES_MAX: u32 = 4;
pub const DUNGEON_BOSS_LEVEL_BONUS: u32 = 3;
pub const STANDARD_ROOM_LOOT_COUNT: usize = 1;
pub const BOSS_ROOM_LOOT_COUNT: usize = 3;

// Environment stat checks
pub const STAT_CHECK_BASE: u32 = 10;
pub const STAT_CHECK_PER_DEPTH: u32 = 2;
pub const STAT_CHECK_VARIANCE_MAX: u32 = 5;

// Battle resolution
pub const ENEMY_STRENGTH_PER_LEVEL: u32 = 5;
pub const PLAYER_STRENGTH_PER_PARTICIPANT: u32 = 10;
pub const LUCK_FACTOR_MIN: f64 = 0.8;
pub const LUCK_FACTOR_MAX: f64 = 1.2;
pub const DEFEAT_DAMAGE_MIN_RATIO: f64 = 0.2;
pub const DEFEAT_DAMAGE_MAX_RATIO: f64 = 0.4;
pub const CASUALTY_HEALTH_RATIO: f64 = 0.3;
pub const MIN_HEALTH_AFTER_DEFEAT: u32 = 1;

// Dungeon XP awards
pub const DUNGEON_XP_BASE: u32 = 10;
pub const DUNGEON_XP_ROOM_BONUS: u32 = 20;
pub const DUNGEON_XP_BOSS_ROOM_BONUS: u32 = 50;
pub const DUNGEON_XP_VARIANCE_MAX: u32 = 9;
