//! Session state: which items are out, what is being dragged, the score, and
//! the deferred effects still pending.
//!
//! Everything the session needs from the outside world is handed to it at
//! construction: the scene it places objects in, the feedback sink, the clock
//! that drives deferred effects, and the seed for its random source.

use crate::clock::Clock;
use crate::drag::DragController;
use crate::effects::{shake_jitter, FallAnimation, Task};
use crate::feedback::Feedback;
use crate::item::{Bin, ItemId, ShakeState, TrashItem};
use crate::params::{GameParams, ParamsError};
use crate::picking::xz;
use crate::placement::{self, Placement};
use crate::scene::{NodeId, NodeKind, Scene, SceneObject, Transform};
use crate::scheduler::TimerQueue;
use crate::spawner;
use glam::{Vec2, Vec3};
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    Playing,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid game parameters: {0}")]
    Params(#[from] ParamsError),
    #[error("scene refused to attach the {0} node")]
    SceneRejected(&'static str),
}

pub struct Session<S: Scene, F: Feedback, C: Clock> {
    params: GameParams,
    scene: S,
    feedback: F,
    clock: C,
    rng: StdRng,
    phase: SessionPhase,
    score: u32,
    bins: Vec<Bin>,
    items: Vec<TrashItem>,
    drag: DragController,
    timers: TimerQueue<Task>,
    falls: Vec<FallAnimation>,
    trash_group: NodeId,
    next_item: u32,
    next_shake: u32,
}

impl<S: Scene, F: Feedback, C: Clock> Session<S, F, C> {
    pub fn new(
        params: GameParams,
        mut scene: S,
        feedback: F,
        clock: C,
        seed: u64,
    ) -> Result<Self, SessionError> {
        params.validate()?;
        let root = scene.root();
        let bins_group = scene
            .add_object(root, SceneObject::group("bins"))
            .ok_or(SessionError::SceneRejected("bins"))?;
        let trash_group = scene
            .add_object(root, SceneObject::group("trash"))
            .ok_or(SessionError::SceneRejected("trash"))?;

        let mut bins = Vec::with_capacity(params.bins.len());
        for cfg in &params.bins {
            let node = scene
                .add_object(
                    bins_group,
                    SceneObject {
                        kind: NodeKind::Bin(cfg.category),
                        transform: Transform::from_translation(cfg.position),
                        pick_radius: 0.0,
                    },
                )
                .ok_or(SessionError::SceneRejected("bin"))?;
            bins.push(Bin {
                category: cfg.category,
                position: cfg.position,
                node,
            });
        }

        let drag = DragController::new(params.drag_height);
        Ok(Self {
            params,
            scene,
            feedback,
            clock,
            rng: StdRng::seed_from_u64(seed),
            phase: SessionPhase::NotStarted,
            score: 0,
            bins,
            items: Vec::new(),
            drag,
            timers: TimerQueue::new(),
            falls: Vec::new(),
            trash_group,
            next_item: 0,
            next_shake: 0,
        })
    }

    /// Leave the title screen and put out the first batch. Only works once.
    pub fn start(&mut self) -> bool {
        if self.phase == SessionPhase::Playing {
            return false;
        }
        self.phase = SessionPhase::Playing;
        log::info!("[session] started with {} bins", self.bins.len());
        self.spawn_batch();
        true
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Items still waiting to be sorted, in spawn order.
    pub fn items(&self) -> &[TrashItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&TrashItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn dragged_item(&self) -> Option<ItemId> {
        self.drag.selected()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn falling_count(&self) -> usize {
        self.falls.len()
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut F {
        &mut self.feedback
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ---------------- Pointer input ----------------

    /// Pick up the topmost active item under `screen`, if nothing is held yet.
    pub fn pointer_down(&mut self, screen: Vec2) -> Option<ItemId> {
        if self.phase != SessionPhase::Playing {
            log::trace!("[drag] ignoring pointer down before start");
            return None;
        }
        if self.drag.is_active() {
            return None;
        }
        let candidates: SmallVec<[NodeId; 4]> = self.items.iter().map(|i| i.node).collect();
        let node = self.scene.hit_test(screen, &candidates)?;
        let plane_hit = self
            .scene
            .project_to_plane(screen, self.params.drag_plane_y);
        let item = self.items.iter_mut().find(|i| i.node == node)?;
        if let Some(shake) = item.shake.take() {
            item.position = shake.origin;
            let mut t = self.scene.transform(item.node).unwrap_or_default();
            t.translation = shake.origin;
            self.scene.set_transform(item.node, t);
        }
        if !self.drag.begin(item.id, item.position, plane_hit) {
            return None;
        }
        let (id, category) = (item.id, item.category);
        log::debug!("[drag] pick up {} ({})", id, category.name());
        self.feedback.on_pickup(category);
        Some(id)
    }

    pub fn pointer_move(&mut self, screen: Vec2) -> bool {
        if !self.drag.is_active() {
            return false;
        }
        let Some(hit) = self
            .scene
            .project_to_plane(screen, self.params.drag_plane_y)
        else {
            return false;
        };
        match self.drag.update(hit) {
            Some((id, pos)) => self.move_item(id, pos),
            None => false,
        }
    }

    /// Let go of the held item where it currently is.
    pub fn pointer_up(&mut self) -> Option<Placement> {
        let id = self.drag.end()?;
        let pos = self.item(id)?.position;
        self.drop_item(id, xz(pos))
    }

    // ---------------- Placement ----------------

    /// Put an item down at a ground position and score the result. `None` if
    /// the session is not playing or the item is no longer active.
    pub fn drop_item(&mut self, id: ItemId, drop_xz: Vec2) -> Option<Placement> {
        if self.phase != SessionPhase::Playing {
            return None;
        }
        if self.drag.selected() == Some(id) {
            self.drag.end();
        }
        let index = self.items.iter().position(|i| i.id == id)?;
        self.items[index].shake = None;
        let y = self.items[index].position.y;
        self.move_item(id, Vec3::new(drop_xz.x, y, drop_xz.y));

        let category = self.items[index].category;
        let placement = placement::resolve(category, drop_xz, &self.bins, self.params.bin_radius);
        match placement {
            Placement::Correct { bin, .. } => self.place_correct(index, bin),
            Placement::Incorrect { .. } => self.place_incorrect(index),
            Placement::Missed => {
                log::trace!("[place] {} dropped away from every bin", id);
            }
        }
        Some(placement)
    }

    fn place_correct(&mut self, index: usize, bin_index: usize) {
        let now = self.clock.now();
        let item = self.items.remove(index);
        self.score += self.params.points_per_correct;
        let (bin_category, bin_y) = {
            let bin = &self.bins[bin_index];
            (bin.category, bin.position.y)
        };
        if let Some(from) = self.scene.transform(item.node) {
            self.falls.push(FallAnimation {
                node: item.node,
                started: now,
                from,
                to_y: bin_y,
            });
        }
        self.timers
            .schedule(now, self.params.respawn_delay, Task::RespawnCheck);
        log::debug!(
            "[place] {} ({}) into {} bin, score {}",
            item.id,
            item.category.name(),
            bin_category.name(),
            self.score
        );
        self.feedback.on_correct(bin_category, self.score);
    }

    fn place_incorrect(&mut self, index: usize) {
        let now = self.clock.now();
        let generation = self.next_shake;
        self.next_shake = self.next_shake.wrapping_add(1);
        let item = &mut self.items[index];
        item.shake = Some(ShakeState {
            origin: item.position,
            generation,
        });
        let (id, category) = (item.id, item.category);
        log::debug!("[place] {} ({}) into the wrong bin", id, category.name());
        self.feedback.on_incorrect(category);
        self.shake_step(id, generation, 0, now);
    }

    // ---------------- Deferred effects ----------------

    /// Run every timer that is due and advance running animations. Returns the
    /// number of timers that fired.
    pub fn update(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some((due, task)) = self.timers.pop_due(now) {
            fired += 1;
            match task {
                Task::ShakeStep {
                    item,
                    generation,
                    step,
                } => self.shake_step(item, generation, step, due),
                Task::RespawnCheck => self.respawn_check(),
            }
        }
        self.advance_falls(now);
        fired
    }

    fn shake_step(&mut self, id: ItemId, generation: u32, step: u32, at: Duration) {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return;
        };
        let Some(shake) = item.shake else {
            return;
        };
        if shake.generation != generation {
            return;
        }
        let target = if step < self.params.shake_steps {
            let j = shake_jitter(&mut self.rng, self.params.shake_amount);
            self.timers.schedule(
                at,
                self.params.shake_interval,
                Task::ShakeStep {
                    item: id,
                    generation,
                    step: step + 1,
                },
            );
            shake.origin + Vec3::new(j.x, 0.0, j.y)
        } else {
            item.shake = None;
            shake.origin
        };
        item.position = target;
        let mut t = self.scene.transform(item.node).unwrap_or_default();
        t.translation = target;
        self.scene.set_transform(item.node, t);
    }

    fn respawn_check(&mut self) {
        if self.phase == SessionPhase::Playing && self.items.is_empty() {
            self.spawn_batch();
        }
    }

    fn advance_falls(&mut self, now: Duration) {
        let duration = self.params.fall_duration;
        let scene = &mut self.scene;
        self.falls.retain(|fall| {
            if !scene.contains(fall.node) {
                return false;
            }
            let (t, done) = fall.sample(now, duration);
            if done {
                scene.remove_object(fall.node);
                false
            } else {
                scene.set_transform(fall.node, t);
                true
            }
        });
    }

    // ---------------- Spawning ----------------

    fn spawn_batch(&mut self) {
        for item in self.items.drain(..) {
            self.scene.remove_object(item.node);
        }
        self.drag.end();

        let batch = spawner::spawn_batch(&mut self.rng, &self.params);
        for plan in batch {
            let id = ItemId(self.next_item);
            self.next_item += 1;
            let object = SceneObject {
                kind: NodeKind::Trash {
                    item: id,
                    category: plan.category,
                    variant: plan.variant,
                },
                transform: Transform::from_translation(plan.position),
                pick_radius: self.params.pick_radius,
            };
            let Some(node) = self.scene.add_object(self.trash_group, object) else {
                log::warn!("[spawn] trash group missing; dropping {}", id);
                continue;
            };
            self.items.push(TrashItem {
                id,
                category: plan.category,
                variant: plan.variant,
                position: plan.position,
                node,
                shake: None,
            });
        }
        log::debug!(
            "[spawn] {:?}",
            self.items
                .iter()
                .map(|i| i.variant.name)
                .collect::<SmallVec<[&str; 4]>>()
        );
        if self.items.is_empty() {
            log::warn!("[spawn] nothing spawned; retrying later");
            let now = self.clock.now();
            self.timers
                .schedule(now, self.params.respawn_delay, Task::RespawnCheck);
        }
        self.feedback.on_batch_spawned(self.items.len());
    }

    fn move_item(&mut self, id: ItemId, pos: Vec3) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        item.position = pos;
        let mut t = self.scene.transform(item.node).unwrap_or_default();
        t.translation = pos;
        self.scene.set_transform(item.node, t)
    }
}
