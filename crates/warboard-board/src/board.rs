use warboard_engine::coords::{Vec2, Vec3, Viewport};
use warboard_engine::scene::DrawList;

use crate::camera::OrthoCamera;
use crate::config::BoardConfig;
use crate::draw::{self, LabelStyle};
use crate::layout;
use crate::object::{ObjectId, SceneObject};
use crate::pick::{self, Hit, Picker, Ray};

/// Owner of the object graph, the camera and the draw step.
pub trait SceneService {
    fn add_object(&mut self, object: SceneObject) -> ObjectId;

    fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject>;

    fn object(&self, id: ObjectId) -> Option<&SceneObject>;

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject>;

    /// Objects in insertion order.
    fn objects(&self) -> Box<dyn Iterator<Item = (ObjectId, &SceneObject)> + '_>;

    fn camera(&self) -> &OrthoCamera;

    fn camera_mut(&mut self) -> &mut OrthoCamera;

    fn project(&self, world: Vec3) -> Vec2 {
        self.camera().project(world)
    }

    fn unproject(&self, ndc: Vec2) -> Vec3 {
        self.camera().unproject(ndc)
    }

    /// Records the whole scene into `list`, back to front. `highlight`
    /// gets an outline ring.
    fn render(&self, list: &mut DrawList, viewport: Viewport, highlight: Option<ObjectId>);
}

/// The tabletop scene.
#[derive(Debug, Clone)]
pub struct Board {
    camera: OrthoCamera,
    objects: Vec<(ObjectId, SceneObject)>,
    next_id: u64,
    labels: Option<LabelStyle>,
}

impl Board {
    /// An empty board seen through `camera`.
    pub fn new(camera: OrthoCamera) -> Self {
        Self {
            camera,
            objects: Vec::new(),
            next_id: 0,
            labels: None,
        }
    }

    /// Board laid out from `config`: surface, grid, borders, terrain and
    /// size buttons.
    pub fn from_config(config: &BoardConfig, aspect: f32) -> Self {
        let mut board = Self::new(config.camera(aspect));
        layout::populate(&mut board, config);
        log::debug!("board laid out with {} objects", board.len());
        board
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Ids of the draggable bases, oldest first.
    pub fn models(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects
            .iter()
            .filter(|(_, o)| o.is_model())
            .map(|(id, _)| *id)
    }

    /// Style for the button size labels; `None` leaves buttons unlabelled.
    pub fn set_labels(&mut self, labels: Option<LabelStyle>) {
        self.labels = labels;
    }

    pub fn labels(&self) -> Option<&LabelStyle> {
        self.labels.as_ref()
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        // Ids are handed out in increasing order and the list keeps that order.
        self.objects.binary_search_by_key(&id, |(i, _)| *i).ok()
    }
}

impl SceneService for Board {
    fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.objects.push((id, object));
        id
    }

    fn remove_object(&mut self, id: ObjectId) -> Option<SceneObject> {
        let idx = self.index_of(id)?;
        Some(self.objects.remove(idx).1)
    }

    fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.index_of(id).map(|i| &self.objects[i].1)
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        let idx = self.index_of(id)?;
        Some(&mut self.objects[idx].1)
    }

    fn objects(&self) -> Box<dyn Iterator<Item = (ObjectId, &SceneObject)> + '_> {
        Box::new(self.objects.iter().map(|(id, o)| (*id, o)))
    }

    fn camera(&self) -> &OrthoCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut OrthoCamera {
        &mut self.camera
    }

    fn render(&self, list: &mut DrawList, viewport: Viewport, highlight: Option<ObjectId>) {
        if !viewport.is_valid() {
            return;
        }
        if let Some(id) = highlight.filter(|id| self.index_of(*id).is_none()) {
            log::debug!("highlight {id:?} is not on the board");
        }
        for (id, object) in &self.objects {
            draw::paint_object(
                list,
                &self.camera,
                viewport,
                object,
                highlight == Some(*id),
                self.labels.as_ref(),
            );
        }
    }
}

impl Picker for Board {
    fn pick(&self, ray: &Ray) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .objects
            .iter()
            .filter_map(|(id, object)| pick::intersect(*id, object, ray))
            .collect();
        pick::sort_hits(&mut hits);
        hits
    }
}
